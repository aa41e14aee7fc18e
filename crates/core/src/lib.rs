//! Domain types shared by the script pipeline, the provider adapters and the
//! HTTP layer: the platform catalog, video model identifiers, the script
//! document model, and per-scene generation results.

pub mod error;
pub mod generation;
pub mod platform;
pub mod script;
pub mod video_model;
