//! Web UI - the portfolio page rendered with Dioxus SSR.
//!
//! The markup carries the DOM contract of the configured variant; the wasm
//! enhancer (see `enhance`) attaches behaviour to it in the browser.
//!
//! - components/ - header/nav, theme toggle, projects, lightbox, contact form
//! - pages/ - the home page

pub mod components;
pub mod pages;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::config::SiteConfig;
use pages::HomePage;

/// Render the complete home page document
pub fn render_home(config: &SiteConfig) -> String {
    let config = config.clone();
    let html = dioxus::ssr::render_element(rsx! { HomePage { config } });
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html)
}

/// GET / - Portfolio page
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_home(&state.config))
}
