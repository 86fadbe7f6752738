use admate_capture::setup_logging;

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        // A second call must leave the first subscriber in place.
        setup_logging();
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_decoding_with_logging_enabled() {
    setup_logging();
    let blob = admate_capture::data_url::data_url_to_blob("data:image/gif;base64,R0lGODlh").unwrap();
    assert_eq!(blob.bytes(), b"GIF89a");
}
