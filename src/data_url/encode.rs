use base64::{Engine as _, engine::general_purpose};

use crate::core::models::BinaryObject;

/// Builds a `data:<mime>;base64,<payload>` URL with standard padded base64.
#[must_use]
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, encoded)
}

#[must_use]
pub fn to_data_url(blob: &BinaryObject) -> String {
    encode_data_url(blob.mime(), blob.bytes())
}
