//! File naming for captured advertisement photos.
//!
//! Located captures are named
//! `{advertiser}_{line}_{station}_{user}_{YYYYMMDD}_{NN}.jpg`; captures taken
//! without a station drop the line and station. The user-entered part is
//! omitted when blank.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const MAX_PART_CHARS: usize = 80;

static FORBIDDEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\:*?"<>|]"#)
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Removes characters that are invalid in file names, collapses whitespace
/// and caps the length. Returns `"unknown"` when nothing is left.
#[must_use]
pub fn sanitize_filename_part(value: &str) -> String {
    let stripped = FORBIDDEN_RE.replace_all(value, "");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let part: String = collapsed.trim().chars().take(MAX_PART_CHARS).collect();
    if part.is_empty() {
        "unknown".to_string()
    } else {
        part
    }
}

/// Normalizes a date to `YYYYMMDD`: an 8-digit string is kept, otherwise the
/// first eight digits found are used, or `00000000` if there are none.
#[must_use]
pub fn normalize_date_part(date: &str) -> String {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        return date.to_string();
    }
    let digits: String = date.chars().filter(char::is_ascii_digit).take(8).collect();
    if digits.is_empty() {
        "00000000".to_string()
    } else {
        digits
    }
}

#[must_use]
pub fn date_part(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// 1-based photo index clamped to `01..=99`.
#[must_use]
pub fn photo_sequence(index: usize) -> String {
    format!("{:02}", index.clamp(1, 99))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLocation {
    pub subway_line: String,
    pub station_name: String,
}

/// Everything that goes into a capture file name except the photo index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureName {
    pub advertiser: String,
    /// `None` for captures taken with location skipped.
    pub location: Option<StationLocation>,
    pub user_entered_name: String,
    pub date: String,
}

impl CaptureName {
    #[must_use]
    pub fn new(advertiser: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            advertiser: advertiser.into(),
            location: None,
            user_entered_name: String::new(),
            date: date.into(),
        }
    }

    #[must_use]
    pub fn on_date(advertiser: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(advertiser, date_part(date))
    }

    #[must_use]
    pub fn at_station(mut self, subway_line: impl Into<String>, station_name: impl Into<String>) -> Self {
        self.location = Some(StationLocation {
            subway_line: subway_line.into(),
            station_name: station_name.into(),
        });
        self
    }

    #[must_use]
    pub fn with_user_entered_name(mut self, name: impl Into<String>) -> Self {
        self.user_entered_name = name.into();
        self
    }

    /// File name for the `index`-th photo (1-based).
    #[must_use]
    pub fn filename(&self, index: usize) -> String {
        let mut parts = vec![sanitize_filename_part(&self.advertiser)];
        if let Some(loc) = &self.location {
            parts.push(sanitize_filename_part(&loc.subway_line));
            parts.push(sanitize_filename_part(&loc.station_name));
        }
        if !self.user_entered_name.trim().is_empty() {
            parts.push(sanitize_filename_part(&self.user_entered_name));
        }
        parts.push(normalize_date_part(&self.date));
        parts.push(photo_sequence(index));
        format!("{}.jpg", parts.join("_"))
    }

    /// File names for `count` photos, numbered from 1.
    #[must_use]
    pub fn filenames(&self, count: usize) -> Vec<String> {
        (1..=count).map(|i| self.filename(i)).collect()
    }
}

#[must_use]
pub fn build_capture_filename(
    advertiser: &str,
    subway_line: &str,
    station_name: &str,
    user_entered_name: &str,
    date: &str,
    photo_index: usize,
) -> String {
    CaptureName::new(advertiser, date)
        .at_station(subway_line, station_name)
        .with_user_entered_name(user_entered_name)
        .filename(photo_index)
}

#[must_use]
pub fn build_no_location_filename(
    advertiser: &str,
    user_entered_name: &str,
    date: &str,
    photo_index: usize,
) -> String {
    CaptureName::new(advertiser, date)
        .with_user_entered_name(user_entered_name)
        .filename(photo_index)
}
