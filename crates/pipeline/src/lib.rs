//! Script pipeline: turns a free-text video idea into a structured
//! [`ScriptDocument`](reels_core::script::ScriptDocument).
//!
//! Three dependent stages run in order, each issuing exactly one call to a
//! [`TextGenerator`](generator::TextGenerator):
//!
//! 1. analyze the idea against the platform's constraints,
//! 2. craft a story (title, hook, narrative, call to action),
//! 3. break the story into scene prompts for video generation.

pub mod error;
pub mod generator;
pub mod openai;
pub mod parse;
pub mod prompts;
pub mod script_pipeline;

pub use error::{GenerationError, PipelineError};
pub use generator::{JsonObject, TextGenerator};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use script_pipeline::{ScriptPipeline, DEFAULT_SCENE_COUNT};
