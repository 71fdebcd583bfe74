//! User interface
//!
//! - Localized string table (strings.rs)
//! - What the diagnosis panel shows, independent of widgets (panel.rs)
//! - iced widget tree for the window (layout.rs)

pub mod layout;
pub mod panel;
pub mod strings;

pub use layout::view;
