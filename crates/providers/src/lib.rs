//! Video generation provider adapters and the dispatcher that routes scenes
//! to them.
//!
//! Each adapter turns a [`Scene`](reels_core::script::Scene) into one
//! provider-specific HTTP call and normalizes the reply into a
//! [`GenerationResult`](reels_core::generation::GenerationResult). Call
//! failures are isolated per scene; only a missing credential escapes as an
//! error.

pub mod adapter;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod grok;
pub mod veo3;
pub mod wan;

pub use adapter::{Submission, VideoProvider};
pub use config::ProviderConfig;
pub use dispatcher::{JobStatus, ProviderDispatcher};
pub use error::ProviderError;
