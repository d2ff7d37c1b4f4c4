//! Shared UI components for the Dioxus-rendered portfolio page.

pub mod contact;
pub mod layout;
pub mod lightbox;
pub mod nav;
pub mod projects;
pub mod theme;

pub use contact::ContactSection;
pub use layout::Layout;
pub use lightbox::LightboxShell;
pub use nav::Nav;
pub use projects::ProjectGrid;
pub use theme::ThemeToggle;
