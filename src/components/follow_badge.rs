//! Follow Badge
//!
//! The "Follow"/"Following" chip every card header carries, with its
//! confirmation popup. Status comes from the engagement store, falling back
//! to the card's own snapshot for pages the store has not seen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FollowPopup;
use crate::context::use_app_context;
use crate::engagement::use_engagement;
use crate::models::PageSummary;

#[component]
pub fn FollowBadge(page: PageSummary, snapshot: bool) -> impl IntoView {
    let ctx = use_app_context();
    let engagement = use_engagement();
    let (popup_open, set_popup_open) = signal(false);

    let is_following = {
        let engagement = engagement.clone();
        let page_id = page.page_id.clone();
        Signal::derive(move || engagement.status_or(&page_id, snapshot))
    };
    let loading = {
        let engagement = engagement.clone();
        Signal::derive(move || engagement.is_loading())
    };

    let confirm = {
        let page = page.clone();
        move |_: ()| {
            let engagement = engagement.clone();
            let page = page.clone();
            let user_id = ctx.user_id();
            spawn_local(async move {
                let _ = engagement
                    .toggle_follow(&page.page_id, page.display_title(), user_id.as_ref())
                    .await;
                set_popup_open.set(false);
            });
        }
    };

    view! {
        <button
            class=move || if is_following.get() { "follow-badge following" } else { "follow-badge" }
            on:click=move |ev| {
                ev.stop_propagation();
                set_popup_open.set(true);
            }
        >
            {move || if is_following.get() { "✓ Following" } else { "+ Follow" }}
        </button>
        <FollowPopup
            visible=popup_open
            is_following=is_following
            loading=loading
            page=page
            on_cancel=move |_: ()| set_popup_open.set(false)
            on_confirm=confirm
        />
    }
}
