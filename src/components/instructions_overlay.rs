//! Instructions Overlay
//!
//! Buzz Wall onboarding pager. Finishing it records the seen flag on the
//! device so it is not shown again.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::models::Instruction;

#[component]
pub fn InstructionsOverlay(#[prop(into)] pages: Signal<Vec<Instruction>>) -> impl IntoView {
    let ctx = use_app_context();
    let config = StoredValue::new(expect_context::<AppConfig>());
    let (index, set_index) = signal(0usize);

    let finish = move || {
        ctx.mark_buzzwall_seen();
        spawn_local(async {
            if let Err(e) = commands::mark_buzzwall_seen().await {
                warn!("[Instructions] Failed to persist seen flag: {}", e);
            }
        });
    };

    let next = move |_| {
        let total = pages.with(Vec::len);
        if index.get_untracked() + 1 >= total {
            finish();
        } else {
            set_index.update(|i| *i += 1);
        }
    };

    let current = move || pages.with(|p| p.get(index.get()).cloned());
    let is_last = move || index.get() + 1 >= pages.with(Vec::len);

    view! {
        <Show when=move || !ctx.buzzwall_seen.get() && pages.with(|p| !p.is_empty())>
            <div class="modal-overlay instructions">
                <div class="modal-content">
                    {move || current().map(|page| view! {
                        <img class="instruction-image" src=config.with_value(|c| c.image_url(&page.image)) alt="" />
                        <h3>{page.title}</h3>
                        <p>{page.description}</p>
                    })}
                    <div class="pager-dots">
                        {move || {
                            let active = index.get();
                            (0..pages.with(Vec::len))
                                .map(|i| view! { <span class=if i == active { "dot active" } else { "dot" }></span> })
                                .collect_view()
                        }}
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| finish()>"Skip"</button>
                        <button class="btn btn-primary" on:click=next>
                            {move || if is_last() { "Got it" } else { "Next" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
