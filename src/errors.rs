use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Malformed data URL: {0}")]
    MalformedInput(String),

    #[error("Failed to decode base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to decode image {image} of visit {visit}: {source}")]
    BundleEntry {
        visit: usize,
        image: usize,
        #[source]
        source: Box<CaptureError>,
    },
}

impl CaptureError {
    /// Wraps a per-image failure with its position inside a capture bundle.
    #[must_use]
    pub fn in_bundle(self, visit: usize, image: usize) -> Self {
        CaptureError::BundleEntry {
            visit,
            image,
            source: Box::new(self),
        }
    }
}
