//! Verification Card
//!
//! A submitted task on the Verification tab, styled by its moderation
//! bucket, plus the titled section that groups cards of one bucket.

use leptos::prelude::*;

use crate::config::{AppConfig, REVIEW_WINDOW};
use crate::format::{long_date, now_local, relative_from, short_datetime};
use crate::models::{VerificationBucket, VerificationTask};
use crate::navigation::{navigate, Destination};

/// Only rejected submissions lead anywhere: back to the challenge to redo it
pub fn verification_destination(task: &VerificationTask, bucket: VerificationBucket) -> Option<Destination> {
    match bucket {
        VerificationBucket::Rejected => Some(Destination::ChallengesList {
            challenge_id: task.challenge_id.clone(),
            page_id: task.page_id.clone(),
        }),
        VerificationBucket::UnderReview | VerificationBucket::Completed => None,
    }
}

#[component]
pub fn VerificationCard(task: VerificationTask, bucket: VerificationBucket) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let destination = verification_destination(&task, bucket);
    let submitted = relative_from(task.submitted_or_created(), now_local());
    let frequency = task.frequency;
    let submitted_at = task
        .submitted_date
        .clone()
        .filter(|_| bucket == VerificationBucket::UnderReview);

    let open = move |_| {
        if let Some(destination) = &destination {
            navigate(destination);
        }
    };

    let info = match bucket {
        VerificationBucket::UnderReview => Some(view! {
            <div class="verification-info review">"⌛ Expected: "{REVIEW_WINDOW}</div>
        }.into_any()),
        VerificationBucket::Completed => task.completion_date.as_deref().map(|date| view! {
            <div class="verification-info completed">"📅 "{long_date(date)}</div>
        }.into_any()),
        VerificationBucket::Rejected => task.rejection_reason.clone().map(|reason| view! {
            <div class="verification-info rejected">"ⓘ "{reason}</div>
        }.into_any()),
    };

    view! {
        <div class=format!("card verification-card {}", bucket.css_class()) on:click=open>
            <div class="card-header">
                <div class="brand">
                    <img class="brand-image" src=config.image_url(&task.brand.image) alt="" />
                    <div>
                        <div class="brand-name">{task.brand.title.clone()}</div>
                        <div class="date">{submitted}</div>
                    </div>
                </div>
                <span class=frequency.badge_class()>{frequency.icon()}" "{frequency.label()}</span>
            </div>

            <div class="task-image">
                <img src=config.image_url(&task.image) alt="" />
                <div class="status-overlay">
                    <span class="status-icon">{bucket.icon()}</span>
                    <div class="status-title">{bucket.card_title()}</div>
                    <div class="status-subtitle">{task.subtitle(bucket)}</div>
                    {submitted_at.map(|date| view! {
                        <div class="submitted-at">"⏱ "{short_datetime(&date)}</div>
                    })}
                </div>
            </div>

            <div class="task-details">
                <div class="task-name">{task.task_name.clone()}</div>
                <div class="challenge-title">{task.challenge_title.clone()}</div>
                <div class="task-meta">
                    <span>"☆ "{task.reward_points}" pts"</span>
                    {info}
                </div>
            </div>

            <div class="task-action">{bucket.button_text()}" ›"</div>
        </div>
    }
}

/// Titled group of one bucket; renders nothing when the bucket is empty
#[component]
pub fn VerificationSection(bucket: VerificationBucket, tasks: Vec<VerificationTask>) -> impl IntoView {
    if tasks.is_empty() {
        return ().into_any();
    }
    let count = tasks.len();

    view! {
        <section class=format!("verification-section {}", bucket.css_class())>
            <div class="section-header">
                <span class="section-icon">{bucket.icon()}</span>
                <span class="section-title">{bucket.section_title()}</span>
                <span class="section-badge">{count}</span>
            </div>
            {tasks
                .into_iter()
                .map(|task| view! { <VerificationCard task=task bucket=bucket /> })
                .collect_view()}
        </section>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageId;

    fn submission() -> VerificationTask {
        serde_json::from_str(r#"{"challenge_id": 8, "page_id": 5, "verification_status": "rejected"}"#).unwrap()
    }

    #[test]
    fn test_rejected_restarts_challenge() {
        assert_eq!(
            verification_destination(&submission(), VerificationBucket::Rejected),
            Some(Destination::ChallengesList {
                challenge_id: "8".into(),
                page_id: PageId::new("5"),
            })
        );
    }

    #[test]
    fn test_review_and_completed_are_informational() {
        assert_eq!(verification_destination(&submission(), VerificationBucket::UnderReview), None);
        assert_eq!(verification_destination(&submission(), VerificationBucket::Completed), None);
    }
}
