//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the last
//! server response of every screen retrieval.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{
    group_verification, FeedItem, Instruction, NowItem, Task, VerificationGroups, VerificationTask,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Buzz Wall feed, completed challenges included
    pub feed: Vec<FeedItem>,
    /// Pages near the device
    pub now: Vec<NowItem>,
    /// Buzz Wall onboarding pages
    pub instructions: Vec<Instruction>,
    /// Todo: tasks the user has joined
    pub ongoing: Vec<Task>,
    /// Todo: submitted tasks awaiting or past moderation
    pub verification: Vec<VerificationTask>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Feed items that should be rendered
pub fn visible_feed(store: &AppStore) -> Vec<FeedItem> {
    store
        .feed()
        .get()
        .into_iter()
        .filter(FeedItem::is_visible)
        .collect()
}

pub fn verification_groups(store: &AppStore) -> VerificationGroups {
    store.verification().with(|tasks| group_verification(tasks))
}

/// Count shown on the Verification tab badge
pub fn verification_count(store: &AppStore) -> usize {
    store.verification().with(|tasks| tasks.len())
}
