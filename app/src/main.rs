#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod fetcher;

use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(app::App);
}
