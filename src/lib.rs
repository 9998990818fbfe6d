//! Best-case scenario card generation backed by a structured-output
//! text-generation API.

pub mod cancel;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod credential;
pub mod engine;
pub mod errors;
pub mod log;
pub mod prompt;
pub mod provider;
pub mod schema;
pub mod ux;
pub mod wire;

pub use cancel::CancelToken;
pub use engine::Engine;
pub use errors::{GenerationError, ProviderFailure};
pub use wire::{GenerationRequest, GenerationResult, ScenarioCard};
