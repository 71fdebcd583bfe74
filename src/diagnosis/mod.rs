//! Diagnosis client
//!
//! Everything between a selected photo and a typed `Diagnosis`:
//! - Result types returned by the model (model.rs)
//! - Supported response languages (language.rs)
//! - Instruction template sent with the photo (prompt.rs)
//! - Chat-completions request/response envelopes (wire.rs)
//! - Fence stripping and strict JSON parsing (response.rs)
//! - Provider trait, HTTP provider and the client itself (client.rs)

pub mod client;
pub mod language;
pub mod model;
pub mod prompt;
pub mod response;
pub mod wire;

pub use client::{DiagnosisClient, OpenAiProvider};
pub use language::Language;
pub use model::Diagnosis;
