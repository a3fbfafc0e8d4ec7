//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{SessionUser, UserId};
use crate::navigation::Tab;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user, `None` until the session loads or when signed out
    pub user: ReadSignal<Option<SessionUser>>,
    set_user: WriteSignal<Option<SessionUser>>,
    /// Session has been read from the device
    pub session_loaded: ReadSignal<bool>,
    set_session_loaded: WriteSignal<bool>,
    /// Buzz Wall instructions were walked through on this device
    pub buzzwall_seen: ReadSignal<bool>,
    set_buzzwall_seen: WriteSignal<bool>,
    /// Trigger to refetch screen data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch screen data - write
    set_reload_trigger: WriteSignal<u32>,
    pub active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
}

impl AppContext {
    pub fn new() -> Self {
        let (user, set_user) = signal(None);
        let (session_loaded, set_session_loaded) = signal(false);
        let (buzzwall_seen, set_buzzwall_seen) = signal(false);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (active_tab, set_active_tab) = signal(Tab::default());
        Self {
            user,
            set_user,
            session_loaded,
            set_session_loaded,
            buzzwall_seen,
            set_buzzwall_seen,
            reload_trigger,
            set_reload_trigger,
            active_tab,
            set_active_tab,
        }
    }

    /// Install what was read from the device
    pub fn set_session(&self, user: Option<SessionUser>, buzzwall_seen: bool) {
        self.set_user.set(user);
        self.set_buzzwall_seen.set(buzzwall_seen);
        self.set_session_loaded.set(true);
    }

    pub fn mark_buzzwall_seen(&self) {
        self.set_buzzwall_seen.set(true);
    }

    /// Current user id without subscribing
    pub fn user_id(&self) -> Option<UserId> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Trigger a refetch of screen data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_tab(&self, tab: Tab) {
        self.set_active_tab.set(tab);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
