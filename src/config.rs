use std::env;
use std::path::PathBuf;

/// Server configuration from environment variables. Every knob has a
/// development default; the secret default is intentionally the same
/// insecure placeholder the dashboard has always shipped with.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub jwt_secret: String,
    pub video_dir: PathBuf,
    pub thumbnail_dir: PathBuf,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: u64,
}

impl Config {
    pub fn from_env() -> Config {
        let defaults = Config::default();

        Config {
            host: env::var("ADBOARD_HOST").unwrap_or(defaults.host),
            port: env::var("ADBOARD_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.port),
            debug: env::var("ADBOARD_DEBUG")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.debug),
            jwt_secret: env::var("ADBOARD_JWT_SECRET").unwrap_or(defaults.jwt_secret),
            video_dir: env::var("ADBOARD_VIDEO_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.video_dir),
            thumbnail_dir: env::var("ADBOARD_THUMBNAIL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.thumbnail_dir),
            template_dir: env::var("ADBOARD_TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            static_dir: env::var("ADBOARD_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            max_upload_bytes: env::var("ADBOARD_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            debug: false,
            jwt_secret: "jwt-secret-key-change-in-production".to_string(),
            video_dir: PathBuf::from("uploads/videos"),
            thumbnail_dir: PathBuf::from("uploads/thumbnails"),
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: 100 * 1024 * 1024,
        }
    }
}
