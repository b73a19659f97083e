#![allow(non_snake_case)]

use dioxus_logger::tracing::Level;

mod api;
mod app;
mod components;
mod config;
mod store;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    dioxus::launch(app::App);
}
