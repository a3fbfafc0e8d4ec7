//! Top Bar
//!
//! App title, search entry and the signed-in user's avatar.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::navigation::{navigate, Destination};

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<AppConfig>();

    let avatar = move || {
        ctx.user.get().map(|user| {
            let user_id = user.id.clone();
            let open = move |_| navigate(&Destination::UserProfile { user_id: user_id.clone() });
            if user.image.is_empty() {
                view! { <div class="avatar default-avatar" on:click=open>{user.initial()}</div> }.into_any()
            } else {
                view! { <img class="avatar" src=config.image_url(&user.image) alt="" on:click=open /> }.into_any()
            }
        })
    };

    view! {
        <header class="top-bar">
            <span class="app-title">"Wowfy"</span>
            <div class="top-bar-actions">
                <button class="icon-btn" title="Search" on:click=move |_| navigate(&Destination::Search)>"🔍"</button>
                {avatar}
            </div>
        </header>
    }
}
