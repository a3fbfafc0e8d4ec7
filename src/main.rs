//! Wowfy Frontend Entry Point

mod api;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod engagement;
mod format;
mod location;
mod models;
mod navigation;
mod notices;
mod screens;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
