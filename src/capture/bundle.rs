//! Archive plan for a capture session: which decoded image goes under which
//! path. Packing the entries into an actual ZIP is left to the caller.

use chrono::NaiveDateTime;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::capture::filename::{CaptureName, StationLocation, photo_sequence, sanitize_filename_part};
use crate::core::config::DecodeOptions;
use crate::core::models::BinaryObject;
use crate::data_url::decode::convert;
use crate::errors::CaptureError;

/// Label used in archive names when no advertiser was recognised.
pub const UNRECOGNISED_ADVERTISER: &str = "광고주미인식";

/// Station and line placeholder for visits captured without a location.
pub const UNRESOLVED_LOCATION: &str = "미인식";

static ARCHIVE_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\:*?"<>|]"#)
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Photos taken at one station stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visit {
    pub location: Option<StationLocation>,
    /// Image data URLs in capture order.
    pub images: Vec<String>,
    /// File names parallel to `images`; missing entries fall back to `image_NN.jpg`.
    pub filenames: Vec<String>,
}

impl Visit {
    /// Builds a visit whose file names are generated from `name`.
    #[must_use]
    pub fn named(name: &CaptureName, images: Vec<String>) -> Self {
        Self {
            location: name.location.clone(),
            filenames: name.filenames(images.len()),
            images,
        }
    }

    fn folder(&self) -> String {
        match &self.location {
            Some(loc) => format!(
                "{}_{}/",
                sanitize_filename_part(&loc.station_name),
                sanitize_filename_part(&loc.subway_line)
            ),
            None => format!("{0}_{0}/", UNRESOLVED_LOCATION),
        }
    }

    fn filename_at(&self, index: usize) -> String {
        self.filenames
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("image_{}.jpg", photo_sequence(index + 1)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub path: String,
    pub blob: BinaryObject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureBundle {
    entries: Vec<BundleEntry>,
}

impl CaptureBundle {
    /// Decodes every image of every visit into archive entries.
    ///
    /// Entries are grouped into `{station}_{line}/` folders only when more
    /// than one visit is bundled; visits without a location use
    /// `미인식_미인식/`. A path that is already taken gets a `_2`, `_3`, ...
    /// suffix before its extension so no entry overwrites another.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::BundleEntry` for the first image that fails to
    /// decode; no partial bundle is returned.
    pub fn plan(visits: &[Visit], options: &DecodeOptions) -> Result<Self, CaptureError> {
        let use_folders = visits.len() > 1;
        let mut entries = Vec::with_capacity(visits.iter().map(|v| v.images.len()).sum());
        let mut taken = HashSet::new();

        for (visit_idx, visit) in visits.iter().enumerate() {
            let folder = if use_folders { visit.folder() } else { String::new() };
            for (img_idx, data_url) in visit.images.iter().enumerate() {
                let blob = convert(data_url, options)
                    .map_err(|e| e.in_bundle(visit_idx, img_idx))?;
                let path = unique_path(
                    format!("{}{}", folder, visit.filename_at(img_idx)),
                    &mut taken,
                );
                debug!(path = %path, bytes = blob.len(), "Planned bundle entry");
                entries.push(BundleEntry { path, blob });
            }
        }

        let bundle = Self { entries };
        info!(
            visits = visits.len(),
            entries = bundle.len(),
            total_bytes = bundle.total_bytes(),
            "Capture bundle planned"
        );
        Ok(bundle)
    }

    #[must_use]
    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<BundleEntry> {
        self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.blob.len()).sum()
    }
}

fn unique_path(path: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(path.clone()) {
        return path;
    }
    let (stem, ext) = match path.rfind('.') {
        Some(dot) if dot > path.rfind('/').map_or(0, |slash| slash + 1) => path.split_at(dot),
        _ => (path.as_str(), ""),
    };
    let renamed = (2..)
        .map(|n| format!("{stem}_{n}{ext}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| path.clone());
    warn!(path = %path, renamed = %renamed, "Duplicate bundle path renamed");
    taken.insert(renamed.clone());
    renamed
}

/// Archive file name: `{advertiser}_촬영_{yyyyMMdd_HHmm}.zip`.
#[must_use]
pub fn archive_filename(advertiser_label: Option<&str>, at: NaiveDateTime) -> String {
    let label = advertiser_label
        .map(|l| ARCHIVE_LABEL_RE.replace_all(l, "_").trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| UNRECOGNISED_ADVERTISER.to_string());
    format!("{}_촬영_{}.zip", label, at.format("%Y%m%d_%H%M"))
}
