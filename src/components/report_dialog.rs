//! Report Dialog
//!
//! Confirmation before a certificate's media is flagged for moderation.

use leptos::prelude::*;

#[component]
pub fn ReportDialog(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="report-dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>"Report Content"</h3>
                    <p>"Are you sure you want to report this content? This action cannot be undone."</p>
                    <div class="report-dialog-actions">
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        <button class="confirm-btn accent-unfollow" on:click=move |_| on_confirm.run(())>
                            "Report"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
