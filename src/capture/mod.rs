//! Capture-session helpers: photo file names and the archive plan handed to
//! the ZIP packer.

pub mod bundle;
pub mod filename;
