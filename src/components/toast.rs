//! Toasts
//!
//! Renders the notice queue. Each toast removes itself after
//! `NOTICE_VISIBLE_MS`, or earlier when tapped.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_VISIBLE_MS;
use crate::notices::{use_notices, Notice};

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="toast-stack">
            <For
                each=move || notices.list()
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_VISIBLE_MS).await;
                        notices.dismiss(id);
                    });
                    view! {
                        <div class=notice.kind.css_class() on:click=move |_| notices.dismiss(id)>
                            <div class="toast-title">{notice.title}</div>
                            <div class="toast-message">{notice.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
