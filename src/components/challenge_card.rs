//! Challenge Card
//!
//! Buzz Wall card for a page's new challenge: header with follow badge,
//! cover image, entry/reward/countdown grid and the join action.

use leptos::ev::MouseEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::FollowBadge;
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::engagement::use_engagement;
use crate::format::{countdown_from, entry_label, now_local, relative_from, reward_label, truncate};
use crate::models::{Challenge, EntryDecision, TaskFrequency};
use crate::navigation::{navigate, Destination};
use crate::notices::use_notices;

/// Where tapping the card or its join button leads, or the notice text
/// when the user is short of referrals.
fn join_target(challenge: &Challenge) -> Result<Destination, String> {
    match challenge.entry_decision() {
        EntryDecision::Allowed => Ok(Destination::ChallengeDetails {
            challenge_id: challenge.challenge_id.clone(),
            page_id: challenge.page_id.clone(),
        }),
        EntryDecision::NeedsReferrals(missing) => Err(format!(
            "You need {} more referrals to complete this challenge",
            missing
        )),
    }
}

#[component]
pub fn ChallengeCard(challenge: Challenge, #[prop(into)] district: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<AppConfig>();
    let notices = use_notices();

    // The page lookup carries the authoritative follow state
    {
        let api = use_api();
        let engagement = use_engagement();
        let page_id = challenge.page_id.clone();
        Effect::new(move |_| {
            let Some(user_id) = ctx.user.with(|u| u.as_ref().map(|u| u.id.clone())) else {
                return;
            };
            let district = district.get();
            let api = api.clone();
            let engagement = engagement.clone();
            let page_id = page_id.clone();
            spawn_local(async move {
                match api.page_detail(&page_id, &user_id, district.as_deref()).await {
                    Ok(detail) => {
                        if let Some(following) = detail.is_following {
                            engagement.update_following_status(page_id, following);
                        }
                    }
                    Err(e) => warn!("[ChallengeCard] Page {} lookup failed: {}", page_id, e),
                }
            });
        });
    }

    let join = {
        let challenge = challenge.clone();
        move |_: MouseEvent| match join_target(&challenge) {
            Ok(destination) => navigate(&destination),
            Err(message) => {
                notices.info("More referrals needed", message);
            }
        }
    };

    let join_btn = join.clone();

    let open_page = {
        let page_id = challenge.page_id.clone();
        move |_: MouseEvent| navigate(&Destination::PageHome { page_id: page_id.clone() })
    };

    let is_now = challenge.is_now;
    let started = relative_from(&challenge.start_date, now_local());
    let end_date = challenge.end_date.clone();
    let ends_in = move || countdown_from(&end_date, now_local());

    view! {
        <div class="card challenge-card">
            <div class="card-header">
                <div class="profile" on:click=open_page>
                    <img class="profile-icon" src=config.image_url(&challenge.icon) alt="" />
                    <div class="header-text">
                        <div class="header-title">
                            <span class="page-title">{truncate(&challenge.page_title, 18)}</span>
                            <span class="action-text">" added a challenge"</span>
                        </div>
                        <div class="metadata">
                            <span class="date">{started}</span>
                            <Show when=move || is_now>
                                <span class="now-badge">"📍 Now"</span>
                            </Show>
                            <FollowBadge page=challenge.page_summary() snapshot=challenge.is_following />
                        </div>
                    </div>
                </div>
                {(challenge.frequency == TaskFrequency::Referral).then(|| view! {
                    <div class="referral-counter">
                        <span class="current">{challenge.user_referral_count}</span>
                        <span class="total">"/"{challenge.referral_count}</span>
                        <div class="referral-label">"Referrals"</div>
                    </div>
                })}
            </div>

            <div class="challenge-content" on:click=join>
                <div class="challenge-image" style=format!("background-image: url('{}')", config.image_url(&challenge.image))>
                    <div class="image-gradient">
                        <h3 class="challenge-title">{truncate(&challenge.title, 45)}</h3>
                    </div>
                </div>

                <div class="details-grid">
                    <div class="detail">
                        <span class="detail-icon">"🎟"</span>
                        <span class="detail-label">"Entry Fee"</span>
                        <span class="detail-value">{entry_label(challenge.entry_points)}</span>
                    </div>
                    <div class="detail middle">
                        <span class="detail-icon">"🏆"</span>
                        <span class="detail-label">"Reward"</span>
                        <span class="detail-value">
                            {reward_label(challenge.reward_points)}
                            {challenge.rewards.then(|| view! { <span class="gift">"🎁"</span> })}
                        </span>
                    </div>
                    <div class="detail">
                        <span class="detail-icon">"⏱"</span>
                        <span class="detail-label">"Ends In"</span>
                        <span class="detail-value ends-in">{ends_in}</span>
                    </div>
                </div>

                <button class="join-btn" on:click=move |ev| {
                    ev.stop_propagation();
                    join_btn(ev);
                }>
                    "Join Challenge ›"
                </button>
            </div>
        </div>
    }
}
