//! AdMate Capture - turns camera data URLs into upload-ready binary objects.
//!
//! Captured advertisement photos leave the camera canvas as base64 data URLs.
//! This crate decodes them into [`core::models::BinaryObject`]s tagged with a
//! MIME type, names them after the advertiser, station and date, and plans
//! the archive that gets uploaded with a report.
//!
//! # Example
//!
//! ```
//! use admate_capture::capture::bundle::{CaptureBundle, Visit};
//! use admate_capture::capture::filename::CaptureName;
//! use admate_capture::core::config::DecodeOptions;
//! use admate_capture::data_url::data_url_to_blob;
//!
//! # fn main() -> Result<(), admate_capture::errors::CaptureError> {
//! let blob = data_url_to_blob("data:text/plain;base64,aGVsbG8=")?;
//! assert_eq!(blob.bytes(), b"hello");
//! assert_eq!(blob.mime(), "text/plain");
//!
//! let name = CaptureName::new("Acme", "20250301").at_station("5호선", "공덕");
//! let visit = Visit::named(&name, vec!["data:image/jpeg;base64,/9j/4A==".to_string()]);
//! let bundle = CaptureBundle::plan(&[visit], &DecodeOptions::default())?;
//! assert_eq!(bundle.entries()[0].path, "Acme_5호선_공덕_20250301_01.jpg");
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod capture;
pub mod core;
pub mod data_url;
pub mod errors;
pub mod utils;

/// Configure structured JSON logging.
///
/// Honors `RUST_LOG` through `EnvFilter`, defaulting to `info`. Safe to call
/// more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// admate_capture::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
