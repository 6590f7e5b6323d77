//! Content category classification.
//!
//! # Responsibilities
//! - Map a storage path to a cache category by file extension
//! - Infer the response media type for served objects
//!
//! # Design Decisions
//! - Matching is case-insensitive (clients and tooling disagree on casing)
//! - Unrecognized or missing extensions classify as Opaque
//! - No filesystem or storage access; classification is pure

/// Cache category of a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Still images (png, jpg, jpeg, webp, avif, gif).
    Image,
    /// Video files (mp4, webm).
    Video,
    /// Everything else: no caching benefit, always fetched.
    Opaque,
}

/// Extract the lowercased extension of a path, if any.
fn extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Classify a path into its cache category.
///
/// Total and deterministic: every input maps to exactly one category.
pub fn classify(path: &str) -> Category {
    match extension(path).as_deref() {
        Some("png" | "jpg" | "jpeg" | "webp" | "avif" | "gif") => Category::Image,
        Some("mp4" | "webm") => Category::Video,
        _ => Category::Opaque,
    }
}

/// Infer the response media type from a path's extension.
pub fn media_type(path: &str) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("gif") => "image/gif",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}
