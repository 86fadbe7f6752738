//! Parsing of the text before the first comma of a data URL.

use regex::Regex;
use std::sync::LazyLock;

/// `type/subtype` using RFC 2045 token characters.
static MIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*$")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Structured view of a data URL header such as `data:image/png;base64`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataUrlHeader {
    /// MIME type exactly as written, present only when well formed.
    pub mime: Option<String>,
    /// Encoding hint, currently only `base64`.
    pub encoding: Option<String>,
    /// Remaining `key=value` parameters in header order.
    pub params: Vec<(String, String)>,
}

impl DataUrlHeader {
    /// Parses a header. Never fails: anything unrecognised is left out.
    ///
    /// The `data:` marker is searched for anywhere in the header, so stray
    /// prefixes such as whitespace do not hide the MIME type.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let Some(start) = header.find("data:") else {
            return Self::default();
        };
        let rest = &header[start + "data:".len()..];

        let mut segments = rest.split(';');
        let mime = segments
            .next()
            .filter(|m| is_well_formed_mime(m))
            .map(str::to_string);

        let mut encoding = None;
        let mut params = Vec::new();
        for segment in segments {
            let segment = segment.trim();
            if segment.eq_ignore_ascii_case("base64") {
                encoding = Some("base64".to_string());
            } else if let Some((key, value)) = segment.split_once('=') {
                params.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        Self {
            mime,
            encoding,
            params,
        }
    }

    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.encoding.as_deref() == Some("base64")
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[must_use]
pub fn is_well_formed_mime(mime: &str) -> bool {
    MIME_RE.is_match(mime)
}
