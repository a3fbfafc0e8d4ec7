//! Navigation
//!
//! The two in-app tabs switch locally. Every other screen belongs to the
//! host navigation stack and is addressed by a hash route.

use leptos::logging::{log, warn};

use crate::models::{PageId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    BuzzWall,
    Todo,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::BuzzWall, Tab::Todo];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::BuzzWall => "Buzz Wall",
            Tab::Todo => "To Do",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::BuzzWall => "🏠",
            Tab::Todo => "📋",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    ChallengeDetails { challenge_id: String, page_id: PageId },
    FoodLocation { challenge_id: String, page_id: PageId },
    ChallengesList { challenge_id: String, page_id: PageId },
    PageHome { page_id: PageId },
    UserProfile { user_id: UserId },
    Comments { challenge_id: String, people_data_id: String },
    PostComments { post_id: String },
    ImageViewer { url: String },
    Search,
    OtpVerification,
    DetailSignup,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::ChallengeDetails { challenge_id, page_id } => {
                format!("#/challenge/{}?page={}", challenge_id, page_id)
            }
            Destination::FoodLocation { challenge_id, page_id } => {
                format!("#/food-location/{}?page={}", challenge_id, page_id)
            }
            Destination::ChallengesList { challenge_id, page_id } => {
                format!("#/challenges/{}?page={}", challenge_id, page_id)
            }
            Destination::PageHome { page_id } => format!("#/page/{}", page_id),
            Destination::UserProfile { user_id } => format!("#/user/{}", user_id),
            Destination::Comments { challenge_id, people_data_id } => {
                format!("#/comments/{}/{}", challenge_id, people_data_id)
            }
            Destination::PostComments { post_id } => format!("#/post/{}/comments", post_id),
            Destination::ImageViewer { url } => format!(
                "#/image?src={}",
                percent_encoding::utf8_percent_encode(url, percent_encoding::NON_ALPHANUMERIC)
            ),
            Destination::Search => "#/search".to_string(),
            Destination::OtpVerification => "#/otp".to_string(),
            Destination::DetailSignup => "#/signup/details".to_string(),
        }
    }
}

/// Hand a destination to the host stack
pub fn navigate(destination: &Destination) {
    let path = destination.path();
    log!("[Nav] {}", path);
    let Some(window) = web_sys::window() else {
        warn!("[Nav] No window to navigate {}", path);
        return;
    };
    if let Err(e) = window.location().set_hash(&path) {
        warn!("[Nav] Failed to set route {}: {:?}", path, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        let page_id = PageId::new("12");
        assert_eq!(
            Destination::ChallengeDetails { challenge_id: "3".into(), page_id: page_id.clone() }.path(),
            "#/challenge/3?page=12"
        );
        assert_eq!(
            Destination::FoodLocation { challenge_id: "3".into(), page_id: page_id.clone() }.path(),
            "#/food-location/3?page=12"
        );
        assert_eq!(Destination::PageHome { page_id }.path(), "#/page/12");
        assert_eq!(Destination::OtpVerification.path(), "#/otp");
        assert_eq!(Destination::DetailSignup.path(), "#/signup/details");
    }

    #[test]
    fn test_image_viewer_encodes_url() {
        let path = Destination::ImageViewer { url: "https://cdn.example/a b.png".into() }.path();
        assert_eq!(path, "#/image?src=https%3A%2F%2Fcdn%2Eexample%2Fa%20b%2Epng");
    }
}
