//! Engagement State
//!
//! The followed-pages store shared by every card, plus the report flow.
//! Provided through context; the API behind it is injected so tests run
//! against a fake.

mod like;

use std::collections::HashMap;
use std::sync::Arc;

use leptos::logging::{error, log};
use leptos::prelude::*;
use thiserror::Error;

use crate::api::{ApiError, EngagementApi, Endpoint};
use crate::models::{PageId, UserId};
use crate::notices::Notices;

pub use like::{LikeAffordance, LikeTarget};

pub type SharedApi = Arc<dyn EngagementApi + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngagementError {
    #[error("sign in required")]
    AuthRequired,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Clears the loading flag however the call exits
struct LoadingGuard(RwSignal<bool>);

impl LoadingGuard {
    fn start(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.0.try_set(false);
    }
}

#[derive(Clone)]
pub struct EngagementStore {
    api: SharedApi,
    /// Pages the store has been told about, with their follow state
    followed: RwSignal<HashMap<PageId, bool>>,
    loading: RwSignal<bool>,
    notices: Notices,
}

impl EngagementStore {
    pub fn new(api: SharedApi, notices: Notices) -> Self {
        Self {
            api,
            followed: RwSignal::new(HashMap::new()),
            loading: RwSignal::new(false),
            notices,
        }
    }

    pub fn api(&self) -> SharedApi {
        Arc::clone(&self.api)
    }

    pub fn is_following(&self, page_id: &PageId) -> bool {
        self.status_or(page_id, false)
    }

    /// Store value for known pages, `fallback` (the item snapshot) otherwise
    pub fn status_or(&self, page_id: &PageId, fallback: bool) -> bool {
        self.followed
            .with(|pages| pages.get(page_id).copied().unwrap_or(fallback))
    }

    /// Seed from freshly fetched items. Only the listed pages are replaced.
    pub fn initialize(&self, pages: impl IntoIterator<Item = (PageId, bool)>) {
        let pages: Vec<(PageId, bool)> = pages.into_iter().collect();
        log!("[Engagement] Seeding {} page(s)", pages.len());
        self.followed.update(|followed| followed.extend(pages));
    }

    pub fn update_following_status(&self, page_id: PageId, following: bool) {
        self.followed.update(|followed| {
            followed.insert(page_id, following);
        });
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Flip the follow state of `page_id` on the server, then locally.
    ///
    /// Resolves with the new state. On failure the local state is untouched.
    pub async fn toggle_follow(
        &self,
        page_id: &PageId,
        page_title: &str,
        user_id: Option<&UserId>,
    ) -> Result<bool, EngagementError> {
        let Some(user_id) = user_id.filter(|u| !u.is_blank()) else {
            self.notices.error("Error", "Please log in to follow pages");
            return Err(EngagementError::AuthRequired);
        };

        let _loading = LoadingGuard::start(self.loading);
        let endpoint = Endpoint::follow_toggle(page_id, user_id);

        match self.api.send(&endpoint).await {
            Ok(()) => {
                let mut following = false;
                self.followed.update(|followed| {
                    let entry = followed.entry(page_id.clone()).or_insert(false);
                    *entry = !*entry;
                    following = *entry;
                });
                log!("[Engagement] Page {} following={}", page_id, following);
                if following {
                    self.notices.success("Following", format!("You started following {}", page_title));
                } else {
                    self.notices.success("Unfollowed", format!("You unfollowed {}", page_title));
                }
                Ok(following)
            }
            Err(e) => {
                error!("[Engagement] Follow toggle for page {} failed: {}", page_id, e);
                self.notices.error("Error", "Failed to update follow status. Please try again.");
                Err(e.into())
            }
        }
    }

    /// Flag a certificate's media for moderation
    pub async fn report(
        &self,
        challenge_id: &str,
        people_data_id: &str,
        user_id: Option<&UserId>,
    ) -> Result<(), EngagementError> {
        let Some(user_id) = user_id.filter(|u| !u.is_blank()) else {
            self.notices.error("Failed to Report", "Please log in to report content");
            return Err(EngagementError::AuthRequired);
        };

        let endpoint = Endpoint::report_media(challenge_id, people_data_id, user_id);
        match self.api.send(&endpoint).await {
            Ok(()) => {
                self.notices.success("Report Submitted", "Thank you for your feedback");
                Ok(())
            }
            Err(e) => {
                error!("[Engagement] Report of {}/{} failed: {}", challenge_id, people_data_id, e);
                self.notices.error("Failed to Report", "Please try again later");
                Err(e.into())
            }
        }
    }
}

pub fn use_engagement() -> EngagementStore {
    expect_context::<EngagementStore>()
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use leptos::prelude::*;

    use crate::api::{ApiError, EngagementApi, Endpoint};

    /// Records every request; answers with `failure` when set. With a
    /// watched flag, also records its value at the moment each call lands.
    #[derive(Default)]
    pub struct FakeApi {
        pub calls: Mutex<Vec<Endpoint>>,
        pub failure: Mutex<Option<ApiError>>,
        pub watched: Mutex<Option<RwSignal<bool>>>,
        pub observed: Mutex<Vec<bool>>,
    }

    impl FakeApi {
        pub fn failing(error: ApiError) -> Self {
            Self {
                failure: Mutex::new(Some(error)),
                ..Self::default()
            }
        }

        pub fn watch(&self, flag: RwSignal<bool>) {
            *self.watched.lock().unwrap() = Some(flag);
        }

        pub fn observed(&self) -> Vec<bool> {
            self.observed.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Option<Endpoint> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait(?Send)]
    impl EngagementApi for FakeApi {
        async fn send(&self, endpoint: &Endpoint) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(endpoint.clone());
            let watched = *self.watched.lock().unwrap();
            if let Some(flag) = watched {
                self.observed.lock().unwrap().push(flag.get_untracked());
            }
            match self.failure.lock().unwrap().clone() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }
}
