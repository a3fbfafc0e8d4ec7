//! Certificate Card
//!
//! Buzz Wall card for a user's completed challenge: who finished it, the
//! certificate and optional proof media, likes, comments and reporting.

use leptos::ev::MouseEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{FollowBadge, LikeButton, ReportDialog};
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::engagement::{use_engagement, LikeAffordance, LikeTarget};
use crate::format::{comment_label, truncate};
use crate::models::{Certificate, MediaKind, PageId};
use crate::navigation::{navigate, Destination};
use crate::notices::use_notices;

#[component]
pub fn CertificateCard(certificate: Certificate) -> impl IntoView {
    let ctx = use_app_context();
    let config = expect_context::<AppConfig>();
    let engagement = use_engagement();
    let notices = use_notices();

    let like = LikeAffordance::new(LikeTarget::from(&certificate), false, certificate.like_count, notices);
    let (menu_open, set_menu_open) = signal(false);
    let (report_open, set_report_open) = signal(false);
    // Challenge as served by getChallengeOne, preferred for navigation
    let (details, set_details) = signal(None::<(String, PageId)>);

    // Liked flag, page follow state and challenge details are per-user lookups
    {
        let api = use_api();
        let engagement = engagement.clone();
        let like = like.clone();
        let challenge_id = certificate.challenge_id.clone();
        let people_data_id = certificate.people_data_id.clone();
        let page_id = certificate.page_id.clone();
        Effect::new(move |_| {
            let Some(user_id) = ctx.user.with(|u| u.as_ref().map(|u| u.id.clone())) else {
                return;
            };
            if page_id.is_blank() {
                return;
            }
            let api = api.clone();
            let engagement = engagement.clone();
            let like = like.clone();
            let challenge_id = challenge_id.clone();
            let people_data_id = people_data_id.clone();
            let page_id = page_id.clone();
            spawn_local(async move {
                match api.like_status(&challenge_id, &people_data_id, &user_id).await {
                    Ok(status) => like.seed(status.liked),
                    Err(e) => warn!("[CertificateCard] Like status failed: {}", e),
                }
                match api.page_detail(&page_id, &user_id, None).await {
                    Ok(detail) => {
                        if let Some(following) = detail.is_following {
                            engagement.update_following_status(page_id.clone(), following);
                        }
                    }
                    Err(e) => warn!("[CertificateCard] Page {} lookup failed: {}", page_id, e),
                }
                match api.challenge(&challenge_id, &user_id).await {
                    Ok(challenge) if !challenge.challenge_id.is_empty() => {
                        set_details.set(Some((challenge.challenge_id, challenge.page_id)));
                    }
                    Ok(_) => {}
                    Err(e) => warn!("[CertificateCard] Challenge {} lookup failed: {}", challenge_id, e),
                }
            });
        });
    }

    let open_challenge = {
        let expired = certificate.complete;
        let fallback = (certificate.challenge_id.clone(), certificate.page_id.clone());
        move |_: MouseEvent| {
            if expired {
                notices.info("Challenge Expired", "This challenge is no longer available");
                return;
            }
            let (challenge_id, page_id) = details.get_untracked().unwrap_or_else(|| fallback.clone());
            navigate(&Destination::ChallengeDetails { challenge_id, page_id });
        }
    };

    let confirm_report = {
        let challenge_id = certificate.challenge_id.clone();
        let people_data_id = certificate.people_data_id.clone();
        move |_: ()| {
            let engagement = engagement.clone();
            let challenge_id = challenge_id.clone();
            let people_data_id = people_data_id.clone();
            let user_id = ctx.user_id();
            spawn_local(async move {
                let _ = engagement
                    .report(&challenge_id, &people_data_id, user_id.as_ref())
                    .await;
                set_report_open.set(false);
            });
        }
    };

    let owner = certificate.user_id.clone();
    let avatar = if certificate.user_image.is_empty() {
        view! { <div class="avatar default-avatar">{certificate.avatar_letter().to_string()}</div> }.into_any()
    } else {
        view! { <img class="avatar" src=config.image_url(&certificate.user_image) alt="" /> }.into_any()
    };
    let is_now = certificate.is_now;

    let proof = match certificate.media_kind() {
        Some(MediaKind::Video) => Some(view! {
            <video class="proof-media" src=config.video_url(&certificate.image2) controls=true preload="metadata"></video>
        }.into_any()),
        Some(MediaKind::Image) => Some(view! {
            <img class="proof-media" src=config.image_url(&certificate.image2) alt="" />
        }.into_any()),
        None => None,
    };

    let comments_target = Destination::Comments {
        challenge_id: certificate.challenge_id.clone(),
        people_data_id: certificate.people_data_id.clone(),
    };

    view! {
        <div class="card certificate-card">
            <div class="card-header">
                <div class="profile" on:click=move |_| navigate(&Destination::UserProfile { user_id: owner.clone() })>
                    {avatar}
                    <div class="header-text">
                        <div class="user-name">{certificate.name.clone()}</div>
                        <div class="metadata">
                            <span class="date">{certificate.date.clone()}</span>
                            <Show when=move || is_now>
                                <span class="now-badge">"📍 Now"</span>
                            </Show>
                            <FollowBadge page=certificate.page_summary() snapshot=certificate.is_following />
                        </div>
                    </div>
                </div>
                <div class="more-menu">
                    <button class="more-btn" on:click=move |_| set_menu_open.update(|open| *open = !*open)>"⋮"</button>
                    <Show when=move || menu_open.get()>
                        <div class="menu-dropdown">
                            <button class="menu-item report" on:click=move |_| {
                                set_menu_open.set(false);
                                set_report_open.set(true);
                            }>
                                "⚑ Report Content"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="achievement-banner">
                "🏆 Completed the "
                <strong>{truncate(&certificate.challenge_title, 20)}</strong>
                " challenge"
            </div>

            <div class="certificate-media">
                <img class="certificate-image" src=config.image_url(&certificate.image) alt="" />
                {proof}
            </div>

            <div class="challenge-info" on:click=open_challenge>
                <img class="page-icon" src=config.image_url(&certificate.icon) alt="" />
                <div>
                    <div class="page-title">{truncate(&certificate.page_title, 25)}</div>
                    <div class="challenge-title">{truncate(&certificate.challenge_title, 25)}</div>
                </div>
            </div>

            <div class="engagement">
                <LikeButton affordance=like />
                <button class="comment-btn" on:click=move |_| navigate(&comments_target)>
                    "💬 "{comment_label(certificate.comment_count)}
                </button>
            </div>

            <ReportDialog
                visible=report_open
                on_cancel=move |_: ()| set_report_open.set(false)
                on_confirm=confirm_report
            />
        </div>
    }
}
