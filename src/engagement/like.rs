//! Like Toggle
//!
//! Optimistic, per-item like state. The heart flips immediately; when the
//! server does not acknowledge, both the flag and the counter go back to
//! exactly what they were before the tap.

use leptos::logging::{log, warn};
use leptos::prelude::*;

use super::{EngagementError, SharedApi};
use crate::api::Endpoint;
use crate::models::{Certificate, PageId, Post, UserId};
use crate::notices::Notices;

/// What is being liked, and therefore which endpoint acknowledges it
#[derive(Debug, Clone, PartialEq)]
pub enum LikeTarget {
    /// Challenge submissions and certificates
    Challenge {
        challenge_id: String,
        people_data_id: String,
        task_id: String,
        owner: UserId,
    },
    Post { page_id: PageId, post_id: String },
}

impl LikeTarget {
    pub fn endpoint(&self, user_id: &UserId) -> Endpoint {
        match self {
            LikeTarget::Challenge {
                challenge_id,
                people_data_id,
                task_id,
                owner,
            } => Endpoint::toggle_like(challenge_id, people_data_id, user_id, task_id, owner),
            LikeTarget::Post { page_id, post_id } => {
                Endpoint::toggle_post_like(page_id, post_id, user_id)
            }
        }
    }
}

impl From<&Certificate> for LikeTarget {
    fn from(cert: &Certificate) -> Self {
        LikeTarget::Challenge {
            challenge_id: cert.challenge_id.clone(),
            people_data_id: cert.people_data_id.clone(),
            task_id: cert.task_id.clone(),
            owner: cert.user_id.clone(),
        }
    }
}

impl From<&Post> for LikeTarget {
    fn from(post: &Post) -> Self {
        LikeTarget::Post {
            page_id: post.page_id.clone(),
            post_id: post.post_id.clone(),
        }
    }
}

#[derive(Clone)]
pub struct LikeAffordance {
    pub liked: RwSignal<bool>,
    pub count: RwSignal<i64>,
    /// Set by the first signed-in tap; late status lookups no longer apply
    touched: RwSignal<bool>,
    target: LikeTarget,
    notices: Notices,
}

impl LikeAffordance {
    pub fn new(target: LikeTarget, liked: bool, count: i64, notices: Notices) -> Self {
        Self {
            liked: RwSignal::new(liked),
            count: RwSignal::new(count.max(0)),
            touched: RwSignal::new(false),
            target,
            notices,
        }
    }

    /// Apply a liked flag fetched after render. Ignored once the user has tapped.
    pub fn seed(&self, liked: bool) {
        if self.touched.get_untracked() {
            log!("[Like] Ignoring late status for {:?}", self.target);
            return;
        }
        self.liked.set(liked);
    }

    /// Flip now, confirm with the server, roll back on failure.
    ///
    /// Resolves with the liked flag the item ends up with. Every failure
    /// also leaves a notice.
    pub async fn toggle(&self, api: &SharedApi, user_id: Option<&UserId>) -> Result<bool, EngagementError> {
        let Some(user_id) = user_id.filter(|u| !u.is_blank()) else {
            self.notices.error("Error", "Please log in to like");
            return Err(EngagementError::AuthRequired);
        };

        self.touched.set(true);
        let was_liked = self.liked.get_untracked();
        let was_count = self.count.get_untracked();
        self.liked.set(!was_liked);
        self.count
            .set(if was_liked { (was_count - 1).max(0) } else { was_count + 1 });

        match api.send(&self.target.endpoint(user_id)).await {
            Ok(()) => Ok(!was_liked),
            Err(e) => {
                warn!("[Like] Rolling back {:?}: {}", self.target, e);
                self.liked.set(was_liked);
                self.count.set(was_count);
                self.notices.error("Error", "Failed to update like. Please try again.");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::ApiError;
    use crate::engagement::fake::FakeApi;
    use crate::notices::NoticeKind;

    fn post_target() -> LikeTarget {
        LikeTarget::Post {
            page_id: PageId::new("2"),
            post_id: "77".into(),
        }
    }

    #[tokio::test]
    async fn test_like_success_increments() {
        let owner = Owner::new();
        owner.set();
        let fake = Arc::new(FakeApi::default());
        let api: SharedApi = fake.clone();
        let like = LikeAffordance::new(post_target(), false, 4, Notices::new());

        assert_eq!(like.toggle(&api, Some(&UserId::new("5"))).await, Ok(true));
        assert!(like.liked.get_untracked());
        assert_eq!(like.count.get_untracked(), 5);
        let call = fake.last_call().unwrap();
        assert_eq!(call.path, "toggle-post-likes.php");
        assert_eq!(call.get("user_id"), Some("5"));
    }

    #[tokio::test]
    async fn test_unlike_failure_restores_exact_values() {
        let owner = Owner::new();
        owner.set();
        let api: SharedApi = Arc::new(FakeApi::failing(ApiError::Status(503)));
        let target = LikeTarget::Challenge {
            challenge_id: "3".into(),
            people_data_id: "44".into(),
            task_id: "9".into(),
            owner: UserId::new("8"),
        };
        let notices = Notices::new();
        let like = LikeAffordance::new(target, true, 10, notices);

        let result = like.toggle(&api, Some(&UserId::new("5"))).await;

        assert_eq!(result, Err(EngagementError::Api(ApiError::Status(503))));
        assert!(like.liked.get_untracked());
        assert_eq!(like.count.get_untracked(), 10);
        let notice = notices.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Failed to update like. Please try again.");
    }

    #[tokio::test]
    async fn test_like_without_user_changes_nothing() {
        let owner = Owner::new();
        owner.set();
        let fake = Arc::new(FakeApi::default());
        let api: SharedApi = fake.clone();
        let notices = Notices::new();
        let like = LikeAffordance::new(post_target(), false, 0, notices);

        assert_eq!(like.toggle(&api, None).await, Err(EngagementError::AuthRequired));
        assert!(!like.liked.get_untracked());
        assert_eq!(like.count.get_untracked(), 0);
        assert_eq!(fake.call_count(), 0);
        assert_eq!(notices.last().unwrap().message, "Please log in to like");
    }

    #[tokio::test]
    async fn test_unlike_never_goes_negative() {
        let owner = Owner::new();
        owner.set();
        let api: SharedApi = Arc::new(FakeApi::default());
        let like = LikeAffordance::new(post_target(), true, 0, Notices::new());

        assert_eq!(like.toggle(&api, Some(&UserId::new("5"))).await, Ok(false));
        assert_eq!(like.count.get_untracked(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_on_like_notices_and_restores() {
        let owner = Owner::new();
        owner.set();
        let api: SharedApi = Arc::new(FakeApi::failing(ApiError::Network("offline".into())));
        let notices = Notices::new();
        let like = LikeAffordance::new(post_target(), false, 4, notices);

        assert!(like.toggle(&api, Some(&UserId::new("5"))).await.is_err());
        assert!(!like.liked.get_untracked());
        assert_eq!(like.count.get_untracked(), 4);
        assert_eq!(notices.last().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_seed_applies_before_any_tap() {
        let owner = Owner::new();
        owner.set();
        let like = LikeAffordance::new(post_target(), false, 4, Notices::new());

        like.seed(true);

        assert!(like.liked.get_untracked());
        assert_eq!(like.count.get_untracked(), 4);
    }

    #[tokio::test]
    async fn test_late_status_after_tap_is_ignored() {
        let owner = Owner::new();
        owner.set();
        let api: SharedApi = Arc::new(FakeApi::default());
        let like = LikeAffordance::new(post_target(), false, 4, Notices::new());

        assert_eq!(like.toggle(&api, Some(&UserId::new("5"))).await, Ok(true));
        like.seed(false);

        assert!(like.liked.get_untracked());
        assert_eq!(like.count.get_untracked(), 5);
    }
}
