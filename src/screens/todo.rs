//! Todo Screen
//!
//! Two tabs: tasks the user can continue, and submissions grouped by
//! moderation outcome.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiClient};
use crate::components::{TaskCard, VerificationSection};
use crate::context::use_app_context;
use crate::models::{UserId, VerificationBucket};
use crate::navigation::{navigate, Destination};
use crate::store::{use_app_store, verification_count, verification_groups, AppStore, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoTab {
    #[default]
    Ongoing,
    Verification,
}

impl TodoTab {
    pub const ALL: [TodoTab; 2] = [TodoTab::Ongoing, TodoTab::Verification];

    pub fn title(&self) -> &'static str {
        match self {
            TodoTab::Ongoing => "Ongoing",
            TodoTab::Verification => "Verification",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            TodoTab::Ongoing => "No ongoing tasks found",
            TodoTab::Verification => "No verification tasks found",
        }
    }
}

/// Count badge for a tab label; only the Verification tab carries one
pub fn tab_badge(tab: TodoTab, verification_total: usize) -> Option<usize> {
    match tab {
        TodoTab::Verification if verification_total > 0 => Some(verification_total),
        _ => None,
    }
}

fn fetch_tab(api: ApiClient, store: AppStore, user_id: UserId, tab: TodoTab, loading: RwSignal<bool>) {
    loading.set(true);
    spawn_local(async move {
        match tab {
            TodoTab::Ongoing => match api.ongoing_tasks(&user_id).await {
                Ok(tasks) => {
                    log!("[Todo] Loaded {} ongoing tasks", tasks.len());
                    store.ongoing().set(tasks);
                }
                Err(e) => warn!("[Todo] Ongoing tasks failed: {}", e),
            },
            TodoTab::Verification => match api.verification_tasks(&user_id).await {
                Ok(tasks) => {
                    log!("[Todo] Loaded {} verification tasks", tasks.len());
                    store.verification().set(tasks);
                }
                Err(e) => warn!("[Todo] Verification tasks failed: {}", e),
            },
        }
        loading.set(false);
    });
}

#[component]
pub fn TodoScreen() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let store = use_app_store();

    let active = RwSignal::new(TodoTab::default());
    let ongoing_loading = RwSignal::new(false);
    let verification_loading = RwSignal::new(false);
    let loading_for = move |tab: TodoTab| match tab {
        TodoTab::Ongoing => ongoing_loading,
        TodoTab::Verification => verification_loading,
    };

    Effect::new(move |_| {
        if ctx.session_loaded.get() && ctx.user.with(Option::is_none) {
            navigate(&Destination::OtpVerification);
        }
    });

    // Both tabs load on mount and on every reload
    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let Some(user_id) = ctx.user.with(|u| u.as_ref().map(|u| u.id.clone())) else {
                return;
            };
            for tab in TodoTab::ALL {
                fetch_tab(api.clone(), store, user_id.clone(), tab, loading_for(tab));
            }
        });
    }

    // Pull-to-refresh equivalent: only the visible tab
    let refresh = move |_| {
        let Some(user_id) = ctx.user_id() else {
            return;
        };
        let tab = active.get_untracked();
        fetch_tab(api.clone(), store, user_id, tab, loading_for(tab));
    };

    let ongoing = move || {
        if ongoing_loading.get() && store.ongoing().with(Vec::is_empty) {
            return view! { <div class="spinner"></div> }.into_any();
        }
        let tasks = store.ongoing().get();
        if tasks.is_empty() {
            return view! { <div class="empty-list">"▶ "{TodoTab::Ongoing.empty_text()}</div> }.into_any();
        }
        tasks
            .into_iter()
            .map(|task| view! { <TaskCard task=task /> })
            .collect_view()
            .into_any()
    };

    let verification = move || {
        if verification_loading.get() && verification_count(&store) == 0 {
            return view! { <div class="spinner"></div> }.into_any();
        }
        if verification_count(&store) == 0 {
            return view! { <div class="empty-list">"✓ "{TodoTab::Verification.empty_text()}</div> }.into_any();
        }
        let groups = verification_groups(&store);
        VerificationBucket::ALL
            .into_iter()
            .map(|bucket| view! { <VerificationSection bucket=bucket tasks=groups.bucket(bucket).to_vec() /> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="screen todo">
            <div class="tab-bar">
                {TodoTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class=move || if active.get() == tab { "tab active" } else { "tab" }
                            on:click=move |_| active.set(tab)
                        >
                            {tab.title()}
                            {move || tab_badge(tab, verification_count(&store)).map(|count| view! {
                                <span class="badge-count">{count}</span>
                            })}
                        </button>
                    })
                    .collect_view()}
                <button class="icon-btn refresh" title="Refresh" on:click=refresh>"⟳"</button>
            </div>
            <div class="tab-content">
                {move || match active.get() {
                    TodoTab::Ongoing => ongoing(),
                    TodoTab::Verification => verification(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_verification_tab_has_badge() {
        assert_eq!(tab_badge(TodoTab::Verification, 3), Some(3));
        assert_eq!(tab_badge(TodoTab::Verification, 0), None);
        assert_eq!(tab_badge(TodoTab::Ongoing, 5), None);
    }

    #[test]
    fn test_empty_texts() {
        assert_eq!(TodoTab::Ongoing.empty_text(), "No ongoing tasks found");
        assert_eq!(TodoTab::Verification.empty_text(), "No verification tasks found");
    }
}
