//! Task Card
//!
//! One ongoing task on the Todo screen. Pending tasks render dimmed and do
//! not react to taps.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::format::{now_local, points_short, relative_from};
use crate::models::{Task, TaskAvailability};
use crate::navigation::{navigate, Destination};

/// Where tapping a task leads, if anywhere
pub fn task_destination(task: &Task) -> Option<Destination> {
    if task.availability() == TaskAvailability::Pending {
        return None;
    }
    let challenge_id = task.challenge_id.clone();
    let page_id = task.page_id.clone();
    Some(if task.frequency.is_location_based() {
        Destination::FoodLocation { challenge_id, page_id }
    } else {
        Destination::ChallengesList { challenge_id, page_id }
    })
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let availability = task.availability();
    let ready = availability == TaskAvailability::Continue;
    let destination = task_destination(&task);
    let frequency = task.frequency;

    view! {
        <div
            class=if ready { "card task-card available" } else { "card task-card locked" }
            on:click=move |_| {
                if let Some(destination) = &destination {
                    navigate(destination);
                }
            }
        >
            <div class="card-header">
                <div class="brand">
                    <img class="brand-image" src=config.image_url(&task.brand.image) alt="" />
                    <div>
                        <div class="brand-name">{task.brand.title.clone()}</div>
                        <div class="date">{relative_from(&task.start_date, now_local())}</div>
                    </div>
                </div>
                <span class=frequency.badge_class()>{frequency.icon()}" "{frequency.label()}</span>
            </div>

            <div class="task-image">
                <img src=config.image_url(&task.image) alt="" />
                <div class="task-overlay">{if ready { "▶" } else { "🔒" }}</div>
            </div>

            <div class="task-details">
                <div class="task-name">{task.task_name.clone()}</div>
                <div class="challenge-title">{task.challenge_title.clone()}</div>
                <div class="task-meta">
                    <span>"🎟 "{points_short(task.entry_points, "Free")}</span>
                    <span>"⭐ "{points_short(task.reward_points, "None")}</span>
                    <span class=if ready { "status ready" } else { "status locked" }>
                        {availability.status_label()}
                    </span>
                </div>
            </div>

            {if ready {
                view! { <div class="task-action continue">"Continue ›"</div> }.into_any()
            } else {
                view! { <div class="task-action locked">"🔒 Task Locked"</div> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageId;

    fn task(json: &str) -> Task {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_location_tasks_open_food_location() {
        let food = task(r#"{"challenge_id": 4, "page_id": 2, "frequency": "food", "pending_task": "no"}"#);
        assert!(matches!(task_destination(&food), Some(Destination::FoodLocation { .. })));
    }

    #[test]
    fn test_pending_tasks_open_challenges_list() {
        let pending = task(r#"{"challenge_id": 4, "page_id": 2, "frequency": "bootcamp", "pending_task": "yes"}"#);
        assert_eq!(
            task_destination(&pending),
            Some(Destination::ChallengesList {
                challenge_id: "4".into(),
                page_id: PageId::new("2"),
            })
        );
    }

    #[test]
    fn test_locked_tasks_go_nowhere() {
        let locked = task(r#"{"challenge_id": 4, "frequency": "challenges", "pending_task": "no"}"#);
        assert_eq!(task_destination(&locked), None);
    }
}
