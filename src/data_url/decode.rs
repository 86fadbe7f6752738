use std::borrow::Cow;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use tracing::{debug, warn};

use crate::core::config::DecodeOptions;
use crate::core::models::BinaryObject;
use crate::data_url::header::DataUrlHeader;
use crate::errors::CaptureError;

/// Standard alphabet with non-canonical trailing bits accepted. Padding is
/// removed beforehand by [`strip_atob_padding`], so any `=` left is an error.
const ATOB: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Drops up to two trailing `=`, only when the length is a multiple of four.
fn strip_atob_padding(payload: &str) -> &str {
    if payload.len() % 4 != 0 {
        return payload;
    }
    let payload = payload.strip_suffix('=').unwrap_or(payload);
    payload.strip_suffix('=').unwrap_or(payload)
}

/// Splits a data URL at its first comma into `(header, payload)`.
///
/// Without a comma the whole input is the header and the payload is empty.
#[must_use]
pub fn split_data_url(data_url: &str) -> (&str, &str) {
    data_url.split_once(',').unwrap_or((data_url, ""))
}

/// Decodes standard base64 text into raw bytes, accepting what browsers'
/// `atob` accepts: ASCII whitespace is ignored and padding is optional, but
/// a wrong amount of padding is rejected.
///
/// # Errors
///
/// Returns `CaptureError::Decode` if the payload is not valid base64.
pub fn decode_base64_payload(payload: &str) -> Result<Vec<u8>, CaptureError> {
    let cleaned: Cow<'_, str> = if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(payload.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(payload)
    };

    Ok(ATOB.decode(strip_atob_padding(&cleaned))?)
}

/// Converts a data URL into a [`BinaryObject`].
///
/// The MIME type comes from the header when present and well formed,
/// otherwise from `options.default_mime`. The payload is always decoded as
/// base64.
///
/// # Errors
///
/// Returns `CaptureError::Decode` if the payload is not valid base64. No
/// partial output is produced.
pub fn convert(data_url: &str, options: &DecodeOptions) -> Result<BinaryObject, CaptureError> {
    let (header_text, payload) = split_data_url(data_url);
    let header = DataUrlHeader::parse(header_text);

    let mime = header
        .mime
        .unwrap_or_else(|| options.default_mime.clone());

    let bytes = decode_base64_payload(payload).inspect_err(|e| {
        #[cfg(feature = "debug-logs")]
        warn!(header = %header_text, error = %e, "Rejected data URL payload");
        #[cfg(not(feature = "debug-logs"))]
        warn!(
            payload_len = payload.len(),
            error = %e,
            "Rejected data URL payload"
        );
    })?;

    debug!(mime = %mime, bytes = bytes.len(), "Decoded data URL");
    Ok(BinaryObject::new(bytes, mime))
}

/// Converts a data URL using the default options (`image/jpeg` fallback).
///
/// # Errors
///
/// See [`convert`].
pub fn data_url_to_blob(data_url: &str) -> Result<BinaryObject, CaptureError> {
    convert(data_url, &DecodeOptions::default())
}

/// Converts a data URL, falling back to `default_mime` when the header has
/// no usable MIME type.
///
/// # Errors
///
/// See [`convert`].
pub fn data_url_to_blob_with_mime(
    data_url: &str,
    default_mime: &str,
) -> Result<BinaryObject, CaptureError> {
    convert(data_url, &DecodeOptions::default().with_default_mime(default_mime))
}
