use std::error::Error;
use admate_capture::data_url::data_url_to_blob;
use admate_capture::errors::CaptureError;

#[test]
fn test_capture_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = CaptureError::MalformedInput("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_capture_error_display() {
    let error = CaptureError::MalformedInput("no payload".to_string());
    assert_eq!(format!("{error}"), "Malformed data URL: no payload");

    let error = data_url_to_blob("data:image/png;base64,@@@@").unwrap_err();
    assert!(
        format!("{error}").starts_with("Failed to decode base64 payload: "),
        "unexpected message: {error}"
    );
}

#[test]
fn test_bundle_error_keeps_source() {
    let error = CaptureError::MalformedInput("x".to_string()).in_bundle(2, 5);
    assert_eq!(
        format!("{error}"),
        "Failed to decode image 5 of visit 2: Malformed data URL: x"
    );
    assert!(error.source().is_some());
}

#[test]
fn test_capture_error_into_anyhow() {
    fn decode(input: &str) -> anyhow::Result<usize> {
        Ok(data_url_to_blob(input)?.len())
    }

    assert_eq!(decode("data:text/plain;base64,aGk=").unwrap(), 2);
    let err = decode("data:text/plain;base64,a").unwrap_err();
    assert!(err.downcast_ref::<CaptureError>().is_some());
}
