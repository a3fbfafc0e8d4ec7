//! Location Gate
//!
//! Full-screen prompt shown while the device position is unavailable.

use leptos::prelude::*;

#[component]
pub fn LocationGate(#[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="location-gate">
            <h2>"Grant Location Permissions"</h2>
            <p>
                "To provide you with tailored services and relevant information, Wowfy needs access to your device's location!"
            </p>
            <button class="btn btn-primary" on:click=move |_| on_retry.run(())>"Continue"</button>
        </div>
    }
}
