//! Now Strip
//!
//! Horizontal row of pages near the device.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::format::truncate;
use crate::models::NowItem;
use crate::navigation::{navigate, Destination};

#[component]
pub fn NowStrip(#[prop(into)] items: Signal<Vec<NowItem>>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <Show when=move || items.with(|items| !items.is_empty())>
            <section class="now-strip">
                <div class="now-title">"Now"</div>
                <div class="now-list">
                    <For
                        each=move || items.get()
                        key=|item| item.id.clone()
                        children={
                            let config = config.clone();
                            move |item: NowItem| {
                                let page_id = item.id.clone();
                                view! {
                                    <div class="now-item" on:click=move |_| navigate(&Destination::PageHome { page_id: page_id.clone() })>
                                        {item.is_place().then(|| view! { <span class="now-pin">"📍"</span> })}
                                        <img class="now-image" src=config.image_url(&item.image) alt="" />
                                        <span class="now-name">{truncate(&item.title, 10)}</span>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}
