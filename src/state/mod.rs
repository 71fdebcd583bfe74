//! State management module
//!
//! All state is ephemeral and lives as long as the window:
//! - The diagnosis session and its transitions (session.rs)

pub mod session;

pub use session::{FailureKind, Phase, Session};
