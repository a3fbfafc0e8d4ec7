//! Like Button
//!
//! Heart plus counter for any likeable card. The optimistic flip and the
//! rollback, and the failure notices, live in [`LikeAffordance`]; this only
//! wires the tap.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::engagement::{use_engagement, LikeAffordance};
use crate::format::like_label;

#[component]
pub fn LikeButton(affordance: LikeAffordance) -> impl IntoView {
    let ctx = use_app_context();
    let engagement = use_engagement();
    let liked = affordance.liked;
    let count = affordance.count;

    let on_tap = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let affordance = affordance.clone();
        let api = engagement.api();
        let user_id = ctx.user_id();
        spawn_local(async move {
            // Failures are rolled back and noticed inside the affordance
            let _ = affordance.toggle(&api, user_id.as_ref()).await;
        });
    };

    view! {
        <button class=move || if liked.get() { "like-btn liked" } else { "like-btn" } on:click=on_tap>
            <span class="heart">{move || if liked.get() { "♥" } else { "♡" }}</span>
            <span class="like-label">{move || like_label(count.get())}</span>
        </button>
    }
}
