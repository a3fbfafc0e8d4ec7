//! Post Card
//!
//! Buzz Wall card for a page post: caption, expandable text, image or video,
//! likes and comments.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::{FollowBadge, LikeButton};
use crate::config::AppConfig;
use crate::engagement::{LikeAffordance, LikeTarget};
use crate::format::{comment_label, now_local, relative_from, truncate};
use crate::models::Post;
use crate::navigation::{navigate, Destination};
use crate::notices::use_notices;

/// Text posts collapse past this many characters
const TEXT_PREVIEW: usize = 140;

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (expanded, set_expanded) = signal(false);
    let like = LikeAffordance::new(LikeTarget::from(&post), post.already_liked, post.like_count, use_notices());

    let is_now = post.is_now;
    let posted = relative_from(&post.created_at, now_local());
    let page_id = post.page_id.clone();
    let post_id = post.post_id.clone();
    let comments = post.comment_count;

    let text = post.text.clone();
    let long_text = text.chars().count() > TEXT_PREVIEW;
    let body = move || {
        if expanded.get() {
            text.clone()
        } else {
            truncate(&text, TEXT_PREVIEW)
        }
    };

    let image_url = (!post.image.is_empty()).then(|| config.image_url(&post.image));
    let video_url = (!post.video.is_empty()).then(|| config.video_url(&post.video));

    let open_comments = move |_: MouseEvent| {
        navigate(&Destination::PostComments {
            post_id: post_id.clone(),
        })
    };

    view! {
        <div class="card post-card">
            <div class="card-header">
                <div class="profile" on:click=move |_| navigate(&Destination::PageHome { page_id: page_id.clone() })>
                    <img class="profile-icon" src=config.image_url(&post.page_icon) alt="" />
                    <div class="header-text">
                        <div class="page-title">{truncate(&post.page_title, 20)}</div>
                        <div class="metadata">
                            <span class="date">{posted}</span>
                            <Show when=move || is_now>
                                <span class="now-badge">"📍 Now"</span>
                            </Show>
                            <FollowBadge page=post.page_summary() snapshot=post.is_following />
                        </div>
                    </div>
                </div>
            </div>

            {(!post.caption.is_empty()).then(|| view! {
                <p class="caption">{post.caption.clone()}</p>
            })}

            {(!post.text.is_empty()).then(|| view! {
                <div class="text-content" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    {body}
                    <Show when=move || long_text && !expanded.get()>
                        <span class="read-more">" Read more"</span>
                    </Show>
                </div>
            })}

            {image_url.map(|url| {
                let target = url.clone();
                view! {
                    <div class="media" on:click=move |_| navigate(&Destination::ImageViewer { url: target.clone() })>
                        <img class="media-image" src=url alt="" />
                    </div>
                }
            })}

            {video_url.map(|url| view! {
                <div class="media video">
                    <video class="media-video" src=url controls=true preload="metadata"></video>
                </div>
            })}

            <div class="engagement">
                <LikeButton affordance=like />
                <button class="comment-btn" on:click=open_comments>
                    "💬 "{comment_label(comments)}
                </button>
            </div>
        </div>
    }
}
