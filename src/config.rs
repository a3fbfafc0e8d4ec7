//! Application Configuration
//!
//! Endpoints are baked in at build time from the environment so the same
//! bundle runs unchanged inside the Tauri webview:
//! `WOWFY_API_BASE`, `WOWFY_IMAGE_BASE`, `WOWFY_VIDEO_BASE`, `WOWFY_MAPS_API_KEY`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// How long a notice stays on screen
pub const NOTICE_VISIBLE_MS: u32 = 3000;
/// Stars in the daily login streak
pub const STREAK_LENGTH: u32 = 7;
/// Typical moderation turnaround shown on pending verifications
pub const REVIEW_WINDOW: &str = "24-48 hours";

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
const DEFAULT_IMAGE_BASE: &str = "http://localhost:8000/uploads/images/";
const DEFAULT_VIDEO_BASE: &str = "http://localhost:8000/uploads/videos/";

/// Characters escaped in media paths; `/` is kept so nested folders survive
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub image_base: String,
    pub video_base: String,
    pub maps_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            video_base: DEFAULT_VIDEO_BASE.to_string(),
            maps_api_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: option_env!("WOWFY_API_BASE")
                .map(str::to_string)
                .unwrap_or(defaults.api_base),
            image_base: option_env!("WOWFY_IMAGE_BASE")
                .map(str::to_string)
                .unwrap_or(defaults.image_base),
            video_base: option_env!("WOWFY_VIDEO_BASE")
                .map(str::to_string)
                .unwrap_or(defaults.video_base),
            maps_api_key: option_env!("WOWFY_MAPS_API_KEY")
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }

    pub fn image_url(&self, path: &str) -> String {
        join_media(&self.image_base, path)
    }

    pub fn video_url(&self, path: &str) -> String {
        join_media(&self.video_base, path)
    }
}

fn join_media(base: &str, path: &str) -> String {
    let encoded = utf8_percent_encode(path.trim_start_matches('/'), PATH);
    if base.ends_with('/') {
        format!("{}{}", base, encoded)
    } else {
        format!("{}/{}", base, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_urls() {
        let config = AppConfig {
            image_base: "https://cdn.example/img/".into(),
            video_base: "https://cdn.example/vid".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.image_url("pages/logo.png"), "https://cdn.example/img/pages/logo.png");
        assert_eq!(config.image_url("/my photo.jpg"), "https://cdn.example/img/my%20photo.jpg");
        assert_eq!(config.video_url("clip.mp4"), "https://cdn.example/vid/clip.mp4");
    }
}
