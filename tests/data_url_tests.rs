use admate_capture::core::config::DecodeOptions;
use admate_capture::core::models::BinaryObject;
use admate_capture::data_url::{
    DataUrlHeader, convert, data_url_to_blob, data_url_to_blob_with_mime, encode_data_url,
    extract_image_base64, to_data_url,
};
use admate_capture::errors::CaptureError;
use admate_capture::utils::mime::sniff_image_mime;

#[test]
fn test_hello_example() {
    let blob = data_url_to_blob("data:text/plain;base64,aGVsbG8=").unwrap();
    assert_eq!(blob.bytes(), b"hello");
    assert_eq!(blob.mime(), "text/plain");
}

#[test]
fn test_header_mime_wins_over_default() {
    let opts = DecodeOptions::default().with_default_mime("application/pdf");
    let blob = convert("data:image/png;base64,iVBORw0KGgo=", &opts).unwrap();
    assert_eq!(blob.mime(), "image/png");
    assert_eq!(sniff_image_mime(blob.bytes()), Some("image/png"));
}

#[test]
fn test_default_mime_without_header_mime() {
    let blob = data_url_to_blob("base64,AAAA").unwrap();
    assert_eq!(blob.mime(), "image/jpeg");
    assert_eq!(blob.bytes(), &[0, 0, 0]);

    let blob = data_url_to_blob_with_mime("AAAA", "image/webp").unwrap();
    assert_eq!(blob.mime(), "image/webp");
    assert!(blob.is_empty());
}

#[test]
fn test_no_comma_yields_empty_object() {
    for input in ["", "data:image/png;base64", "aGVsbG8="] {
        let blob = data_url_to_blob(input).unwrap();
        assert_eq!(blob.len(), 0, "{input}");
    }
}

#[test]
fn test_round_trip_preserves_bytes_and_mime() {
    let samples: [(&str, Vec<u8>); 5] = [
        ("image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]),
        ("application/zip", b"PK\x03\x04".to_vec()),
        ("text/plain", b"a".to_vec()),
        ("Image/JPEG", b"abc".to_vec()),
        ("application/octet-stream", (0..=255u8).rev().collect()),
    ];

    for (mime, bytes) in samples {
        let url = encode_data_url(mime, &bytes);
        let blob = data_url_to_blob(&url).unwrap();
        assert_eq!(blob.mime(), mime);
        assert_eq!(blob.bytes(), bytes.as_slice());
        assert_eq!(to_data_url(&blob), url);
    }
}

#[test]
fn test_binary_object_accessors() {
    let blob = BinaryObject::new(vec![1, 2, 3], "image/png");
    assert_eq!(blob.as_ref(), &[1, 2, 3]);
    assert_eq!(blob.to_data_url(), "data:image/png;base64,AQID");
    let (bytes, mime) = blob.into_parts();
    assert_eq!(bytes, vec![1, 2, 3]);
    assert_eq!(mime, "image/png");
}

#[test]
fn test_invalid_base64_fails_fast() {
    let err = data_url_to_blob("data:image/jpeg;base64,%%%").unwrap_err();
    assert!(matches!(err, CaptureError::Decode(_)));
}

#[test]
fn test_header_parsing_exposes_encoding_and_params() {
    let header = DataUrlHeader::parse("data:image/svg+xml;charset=utf-8;base64");
    assert_eq!(header.mime.as_deref(), Some("image/svg+xml"));
    assert!(header.is_base64());
    assert_eq!(header.param("charset"), Some("utf-8"));
}

#[test]
fn test_extract_image_base64_feeds_decoder() {
    let url = "data:image/jpeg;base64,/9j/4A==";
    let payload = extract_image_base64(url).unwrap();
    assert_eq!(payload, "/9j/4A==");
    assert!(matches!(
        extract_image_base64("data:text/plain;base64,aGk="),
        Err(CaptureError::MalformedInput(_))
    ));
}
