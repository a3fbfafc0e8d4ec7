//! Buzz Wall Screen
//!
//! Home feed. Waits for a device position, then shows the Now strip and the
//! feed of challenges, posts and certificates. The daily login reward and
//! the onboarding pager overlay it on first visit.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::{DailyLoginModal, FeedItemCard, InstructionsOverlay, LocationGate, NowStrip};
use crate::config::AppConfig;
use crate::context::use_app_context;
use crate::engagement::use_engagement;
use crate::location::{resolve_locality, LocationError, LocationState};
use crate::models::{DailyStreak, FeedItem, PageId, SessionUser};
use crate::navigation::{navigate, Destination};
use crate::store::{use_app_store, visible_feed, AppStateStoreFields};

/// Where a signed-out or half-registered user has to go first
pub fn session_redirect(user: Option<&SessionUser>) -> Option<Destination> {
    match user {
        None => Some(Destination::OtpVerification),
        Some(user) if user.needs_signup_details() => Some(Destination::DetailSignup),
        Some(_) => None,
    }
}

/// Follow snapshot the feed seeds the engagement store with
pub fn follow_seed(feed: &[FeedItem]) -> Vec<(PageId, bool)> {
    feed.iter()
        .filter(|item| !item.page_id().is_blank())
        .map(|item| (item.page_id().clone(), item.is_following()))
        .collect()
}

#[component]
pub fn BuzzWallScreen() -> impl IntoView {
    let ctx = use_app_context();
    let api = use_api();
    let config = expect_context::<AppConfig>();
    let engagement = use_engagement();
    let store = use_app_store();

    let location = RwSignal::new(LocationState::default());
    let streak = RwSignal::new(None::<DailyStreak>);
    let (feed_loading, set_feed_loading) = signal(false);

    // Session routing
    Effect::new(move |_| {
        if !ctx.session_loaded.get() {
            return;
        }
        if let Some(destination) = ctx.user.with(|user| session_redirect(user.as_ref())) {
            navigate(&destination);
        }
    });

    // Location, then the Now strip for that locality
    let request_location = {
        let api = api.clone();
        let config = config.clone();
        move || {
            let api = api.clone();
            let config = config.clone();
            location.set(LocationState::Pending);
            spawn_local(async move {
                match resolve_locality(&api, &config).await {
                    Ok(locality) => {
                        log!("[BuzzWall] Locality {:?}", locality);
                        location.set(LocationState::Ready(locality));
                    }
                    Err(LocationError::PermissionDenied) => location.set(LocationState::Denied),
                    Err(e) => {
                        warn!("[BuzzWall] {}", e);
                        location.set(LocationState::Denied);
                    }
                }
            });
        }
    };
    request_location();

    {
        let api = api.clone();
        Effect::new(move |_| {
            let Some(locality) = location.with(|l| l.locality().cloned()) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.now(&locality).await {
                    Ok(items) => store.now().set(items),
                    Err(e) => warn!("[BuzzWall] Now lookup failed: {}", e),
                }
            });
        });
    }

    // Daily login reward, once per mount with a user
    {
        let api = api.clone();
        Effect::new(move |prev: Option<bool>| {
            if prev == Some(true) {
                return true;
            }
            let Some(user_id) = ctx.user.with(|u| u.as_ref().map(|u| u.id.clone())) else {
                return false;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.daily_login(&user_id).await {
                    Ok(login) => streak.set(login.streak()),
                    Err(e) => warn!("[BuzzWall] Daily login failed: {}", e),
                }
            });
            true
        });
    }

    // Onboarding pages
    {
        let api = api.clone();
        spawn_local(async move {
            match api.instructions("buzzwall").await {
                Ok(pages) => store.instructions().set(pages),
                Err(e) => warn!("[BuzzWall] Instructions failed: {}", e),
            }
        });
    }

    // Feed, refetched on reload
    {
        let api = api.clone();
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            let Some(user_id) = ctx.user.with(|u| u.as_ref().map(|u| u.id.clone())) else {
                return;
            };
            let api = api.clone();
            let engagement = engagement.clone();
            set_feed_loading.set(true);
            spawn_local(async move {
                match api.buzz_wall(&user_id).await {
                    Ok(feed) => {
                        log!("[BuzzWall] Loaded {} feed items", feed.len());
                        engagement.initialize(follow_seed(&feed));
                        store.feed().set(feed);
                    }
                    Err(e) => warn!("[BuzzWall] Feed failed: {}", e),
                }
                set_feed_loading.set(false);
            });
        });
    }

    let district = Signal::derive(move || {
        location.with(|l| {
            l.locality()
                .map(|locality| locality.district.clone())
                .filter(|district| !district.is_empty())
        })
    });
    let now_items = Signal::derive(move || store.now().get());
    let instructions = Signal::derive(move || store.instructions().get());
    let feed = Memo::new(move |_| visible_feed(&store));

    let retry = move |_: ()| request_location();

    view! {
        <div class="screen buzzwall">
            {move || match location.get() {
                LocationState::Pending => view! {
                    <div class="screen-loading"><div class="spinner"></div></div>
                }.into_any(),
                LocationState::Denied => view! { <LocationGate on_retry=retry.clone() /> }.into_any(),
                LocationState::Ready(_) => view! {
                    <NowStrip items=now_items />
                    <div class="feed">
                        <Show
                            when=move || !feed.with(Vec::is_empty)
                            fallback=move || view! {
                                <Show
                                    when=move || !feed_loading.get()
                                    fallback=|| view! { <div class="spinner"></div> }
                                >
                                    <button class="search-pages" on:click=move |_| navigate(&Destination::Search)>
                                        <span class="search-icon">"⊕"</span>
                                        <span>"Search Pages"</span>
                                    </button>
                                </Show>
                            }
                        >
                            <For
                                each=move || feed.get()
                                key=|item| item.key()
                                children=move |item| view! { <FeedItemCard item=item district=district /> }
                            />
                        </Show>
                    </div>
                }.into_any(),
            }}
            <DailyLoginModal streak=streak />
            <InstructionsOverlay pages=instructions />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn user(steps: i64) -> SessionUser {
        SessionUser {
            id: UserId::new("7"),
            steps,
            name: "Asha".into(),
            image: String::new(),
        }
    }

    #[test]
    fn test_session_redirects() {
        assert_eq!(session_redirect(None), Some(Destination::OtpVerification));
        assert_eq!(session_redirect(Some(&user(1))), Some(Destination::DetailSignup));
        assert_eq!(session_redirect(Some(&user(2))), None);
    }

    #[test]
    fn test_follow_seed_skips_pageless_rows() {
        let feed: Vec<FeedItem> = serde_json::from_str(
            r#"[
                {"info_type": "post", "post_id": 1, "page_id": 4, "is_following": "yes"},
                {"info_type": "challenge", "challenge_id": 2, "page_id": 5},
                {"people_data_id": 3, "page_id": 0}
            ]"#,
        )
        .unwrap();
        let seed = follow_seed(&feed);
        assert_eq!(seed, vec![(PageId::new("4"), true), (PageId::new("5"), false)]);
    }
}
