use regex::Regex;
use std::sync::LazyLock;

use crate::errors::CaptureError;

static IMAGE_DATA_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^data:image/[^;]+;base64,(.+)$")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Returns the raw base64 payload of an image data URL, e.g. for an OCR
/// request body that expects bare base64.
///
/// # Errors
///
/// Returns `CaptureError::MalformedInput` unless the input looks like
/// `data:image/<subtype>;base64,<payload>` with a non-empty payload.
pub fn extract_image_base64(data_url: &str) -> Result<&str, CaptureError> {
    IMAGE_DATA_URL_RE
        .captures(data_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            CaptureError::MalformedInput("expected data:image/<type>;base64,<payload>".to_string())
        })
}
