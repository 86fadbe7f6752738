use serde::{Deserialize, Serialize};

/// MIME type assigned to decoded payloads whose header carries none.
pub const DEFAULT_MIME: &str = "image/jpeg";

/// Caller-supplied settings for data URL decoding.
///
/// Embeddable in a host application's config file:
///
/// ```
/// use admate_capture::core::config::DecodeOptions;
///
/// let opts: DecodeOptions = serde_json::from_str(r#"{"default_mime":"image/png"}"#).unwrap();
/// assert_eq!(opts.default_mime, "image/png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub default_mime: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            default_mime: DEFAULT_MIME.to_string(),
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn with_default_mime(mut self, mime: impl Into<String>) -> Self {
        self.default_mime = mime.into();
        self
    }
}
