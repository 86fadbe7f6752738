//! MIME utilities shared across modules

const SUPPORTED_IMAGE_MIME: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Strips parameters, trims and lowercases a MIME type; `image/jpg` becomes `image/jpeg`.
#[must_use]
pub fn canonicalize_mime(mime: &str) -> String {
    let main = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match main.as_str() {
        "image/jpg" | "image/pjpeg" => "image/jpeg".to_string(),
        other => other.to_string(),
    }
}

/// Returns whether a given MIME type is supported for image uploads.
#[must_use]
pub fn is_supported_image_mime(mime: &str) -> bool {
    let canon = canonicalize_mime(mime);
    SUPPORTED_IMAGE_MIME.contains(&canon.as_str())
}

/// MIME type for an archived image by file name. Anything that is not a
/// known png, gif or webp is treated as JPEG, the capture default.
#[must_use]
pub fn mime_from_filename(name: &str) -> String {
    mime_guess::from_path(name)
        .first()
        .map(|m| canonicalize_mime(m.essence_str()))
        .filter(|m| is_supported_image_mime(m))
        .unwrap_or_else(|| "image/jpeg".to_string())
}

/// Whether a file name carries one of the image extensions accepted in archives.
#[must_use]
pub fn is_image_filename(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    [".jpg", ".jpeg", ".png", ".gif", ".webp"]
        .iter()
        .any(|ext| lower.ends_with(ext))
}

/// File extension (without dot) to use when saving content of this MIME type.
#[must_use]
pub fn extension_for_mime(mime: &str) -> &'static str {
    match canonicalize_mime(mime).as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "application/zip" => "zip",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

/// Guesses an image MIME type from its magic bytes.
#[must_use]
pub fn sniff_image_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        Some("image/png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.starts_with(b"GIF8") {
        Some("image/gif")
    } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}
