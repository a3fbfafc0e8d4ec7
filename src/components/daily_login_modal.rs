//! Daily Login Modal
//!
//! Weekly streak shown on the first Buzz Wall visit of the day.

use leptos::prelude::*;

use crate::models::DailyStreak;

#[component]
pub fn DailyLoginModal(streak: RwSignal<Option<DailyStreak>>) -> impl IntoView {
    let stars = move || {
        streak.get().map(|s| {
            let gold = (0..s.gold).map(|_| view! { <span class="star gold">"★"</span> });
            let gray = (0..s.gray).map(|_| view! { <span class="star gray">"☆"</span> });
            gold.chain(gray).collect_view()
        })
    };

    view! {
        <Show when=move || streak.with(Option::is_some)>
            <div class="modal-overlay" on:click=move |_| streak.set(None)>
                <div class="modal-content daily-login" on:click=|ev| ev.stop_propagation()>
                    <h3>"Daily Login Reward"</h3>
                    <p>{move || streak.get().map(|s| format!("Day {} of your streak", s.gold))}</p>
                    <div class="stars">{stars}</div>
                    <button class="btn btn-primary" on:click=move |_| streak.set(None)>"Collect"</button>
                </div>
            </div>
        </Show>
    }
}
