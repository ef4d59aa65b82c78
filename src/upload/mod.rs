use uuid::Uuid;

pub mod endpoints;
pub mod thumbnail;
pub use endpoints::*;

pub const ALLOWED_VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "avi", "mov", "mkv", "webm"];

pub fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
}

pub fn is_allowed(extension: &str) -> bool {
    ALLOWED_VIDEO_EXTENSIONS.contains(&extension)
}

/// Sanitized filename with a generated prefix so concurrent uploads of
/// the same file cannot collide on disk.
pub fn unique_filename(filename: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize_filename::sanitize(filename))
}
