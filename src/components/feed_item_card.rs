//! Feed Item Card
//!
//! Picks the presenter for one Buzz Wall entry.

use leptos::prelude::*;

use crate::components::{CertificateCard, ChallengeCard, PostCard};
use crate::models::FeedItem;

#[component]
pub fn FeedItemCard(item: FeedItem, #[prop(into)] district: Signal<Option<String>>) -> impl IntoView {
    match item {
        FeedItem::Challenge(challenge) => view! { <ChallengeCard challenge=challenge district=district /> }.into_any(),
        FeedItem::Post(post) => view! { <PostCard post=post /> }.into_any(),
        FeedItem::Certificate(certificate) => view! { <CertificateCard certificate=certificate /> }.into_any(),
    }
}
