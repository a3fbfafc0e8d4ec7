//! Follow Confirmation Popup
//!
//! Modal gate in front of every follow/unfollow. Stateless: everything it
//! shows comes from the caller.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::PageSummary;

/// Copy and styling for one direction of the follow action
#[derive(Debug, Clone, PartialEq)]
pub struct FollowCopy {
    pub title: &'static str,
    pub description: String,
    pub confirm_label: &'static str,
    pub icon: &'static str,
    pub accent_class: &'static str,
}

pub fn follow_copy(is_following: bool, page_title: &str) -> FollowCopy {
    if is_following {
        FollowCopy {
            title: "Unfollow Page?",
            description: format!(
                "You will stop seeing posts and updates from {} in your buzz wall.",
                page_title
            ),
            confirm_label: "Unfollow",
            icon: "👤−",
            accent_class: "accent-unfollow",
        }
    } else {
        FollowCopy {
            title: "Follow Page?",
            description: format!(
                "You will see posts, challenges, and updates from {} in your buzz wall.",
                page_title
            ),
            confirm_label: "Follow",
            icon: "👤+",
            accent_class: "accent-follow",
        }
    }
}

#[component]
pub fn FollowPopup(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] is_following: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    page: PageSummary,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let icon_url = config.image_url(&page.icon);
    let title = page.display_title().to_string();
    let page_type = page.display_type().to_string();

    let copy = {
        let title = title.clone();
        Memo::new(move |_| follow_copy(is_following.get(), &title))
    };

    view! {
        <Show when=move || visible.get()>
            <div class="modal-overlay" on:click=move |_| {
                if !loading.get_untracked() {
                    on_cancel.run(());
                }
            }>
                <div class="follow-popup" on:click=|ev| ev.stop_propagation()>
                    <div class="follow-popup-header">
                        <img class="page-icon" src=icon_url.clone() alt="" />
                        <div class="page-text">
                            <div class="page-title">{title.clone()}</div>
                            <div class="page-type">{page_type.clone()}</div>
                        </div>
                        <button class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                    </div>

                    <div class="follow-popup-body">
                        <div class=move || format!("action-icon {}", copy.get().accent_class)>
                            {move || copy.get().icon}
                        </div>
                        <h3>{move || copy.get().title}</h3>
                        <p>{move || copy.get().description}</p>
                    </div>

                    <div class="follow-popup-actions">
                        <button
                            class="cancel-btn"
                            disabled=move || loading.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class=move || format!("confirm-btn {}", copy.get().accent_class)
                            disabled=move || loading.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || if loading.get() {
                                view! { <span class="spinner"></span> }.into_any()
                            } else {
                                view! { <span>{copy.get().confirm_label}</span> }.into_any()
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
