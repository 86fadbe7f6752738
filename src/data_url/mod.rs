//! Data URL handling: header parsing, decoding into [`BinaryObject`]s and
//! encoding back.
//!
//! [`BinaryObject`]: crate::core::models::BinaryObject

pub mod decode;
pub mod encode;
pub mod header;
pub mod payload;

pub use decode::{convert, data_url_to_blob, data_url_to_blob_with_mime};
pub use encode::{encode_data_url, to_data_url};
pub use header::DataUrlHeader;
pub use payload::extract_image_base64;
