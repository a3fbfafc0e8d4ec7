//! Bottom Navigation
//!
//! Switches between the Buzz Wall and Todo tabs.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::navigation::Tab;

#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="bottom-nav">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        class=move || if ctx.active_tab.get() == tab { "nav-item active" } else { "nav-item" }
                        on:click=move |_| ctx.set_tab(tab)
                    >
                        <span class="nav-icon">{tab.icon()}</span>
                        <span class="nav-label">{tab.label()}</span>
                    </button>
                })
                .collect_view()}
        </nav>
    }
}
