//! Page components for the Dioxus-rendered site.
//!
//! Each page is a Dioxus component that renders a full page using the Layout component.

pub mod home;

pub use home::HomePage;
