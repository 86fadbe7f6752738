use serde::{Deserialize, Serialize};

use crate::data_url::encode::encode_data_url;

/// Immutable bytes tagged with a MIME type, ready for upload or archival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryObject {
    bytes: Vec<u8>,
    mime: String,
}

impl BinaryObject {
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Moves the bytes and MIME type out, e.g. to hand them to an upload body.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.mime)
    }

    /// Re-encodes the object as a `data:<mime>;base64,...` URL.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.mime, &self.bytes)
    }
}

impl AsRef<[u8]> for BinaryObject {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
