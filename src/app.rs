//! Wowfy Frontend App
//!
//! Provides the shared contexts, reads the device session and switches
//! between the Buzz Wall and Todo tabs.

use std::sync::Arc;

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::commands;
use crate::components::{BottomNav, Toasts, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::engagement::EngagementStore;
use crate::navigation::Tab;
use crate::notices::Notices;
use crate::screens::{BuzzWallScreen, TodoScreen};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let api = ApiClient::new(config.api_base.clone());
    let notices = Notices::new();
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(config);
    provide_context(api.clone());
    provide_context(notices);
    provide_context(EngagementStore::new(Arc::new(api), notices));
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Session from device storage
    spawn_local(async move {
        match commands::load_session().await {
            Ok(session) => {
                log!("[App] Session loaded, signed in: {}", session.user.is_some());
                ctx.set_session(session.user, session.buzzwall_seen);
            }
            Err(e) => {
                error!("[App] Failed to load session: {}", e);
                ctx.set_session(None, false);
            }
        }
    });

    // Coming back to the app refreshes screen data
    let focus = window_event_listener(leptos::ev::focus, move |_| ctx.reload());
    on_cleanup(move || focus.remove());

    view! {
        <div class="app-layout">
            <TopBar />
            <main class="main-content">
                {move || match ctx.active_tab.get() {
                    Tab::BuzzWall => view! { <BuzzWallScreen /> }.into_any(),
                    Tab::Todo => view! { <TodoScreen /> }.into_any(),
                }}
            </main>
            <BottomNav />
            <Toasts />
        </div>
    }
}
