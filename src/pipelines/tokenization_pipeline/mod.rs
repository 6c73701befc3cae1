//! Tokenization pipeline for segmenting text into words, sentences, or
//! custom pattern matches.
//!
//! Segmentation itself is delegated to external libraries; this module only
//! wires a chosen provider behind the usual pipeline interface.
//!
//! ## Main Types
//!
//! - [`TokenizationPipeline`] - High-level interface for segmenting text
//! - [`TokenizationPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`TokenizationModel`] - Trait for segmentation provider implementations
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use textlab::pipelines::tokenization_pipeline::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let words = TokenizationPipelineBuilder::words().build()?;
//! let tokens = words.tokenize("Hello! Welcome to NLP practice.")?;
//! println!("{} tokens: {:?}", tokens.len(), tokens);
//!
//! let emails = TokenizationPipelineBuilder::pattern(r"\S+@\S+").build()?;
//! let found = emails.tokenize("Email me at user@example.com")?;
//! println!("{:?}", found);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::TokenizationPipelineBuilder;
pub use model::TokenizationModel;
pub use pipeline::TokenizationPipeline;

pub use crate::models::implementations::segmenters::{
    PatternTokenizerModel, SentenceTokenizerModel, WhitespaceTokenizerModel, WordTokenizerModel,
};
