//! Portfolio site - Rust implementation
//!
//! A static personal portfolio page plus the client-side enhancements it
//! needs in the browser.
//!
//! This library provides:
//! - Pure behaviour for the theme, nav, lightbox, project filter and contact
//!   form (host-testable)
//! - The three page variants and the DOM contract each one binds to
//! - Dioxus SSR rendering, static export and a preview server (`server` feature)
//! - The wasm enhancer wiring the behaviour to the DOM (`wasm32` targets)

pub mod contact;
pub mod lightbox;
pub mod nav;
pub mod projects;
pub mod theme;
pub mod variant;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod assets;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod export;
#[cfg(feature = "server")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod enhance;
