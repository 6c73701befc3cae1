//! Translation pipeline for translating text between languages and
//! detecting the language a text is written in.
//!
//! Translation and language identification are network-backed provider
//! capabilities; every operation here is async and returns the provider's
//! failures to the caller instead of swallowing them.
//!
//! ## Main Types
//!
//! - [`TranslationPipeline`] - High-level interface for translation and detection
//! - [`TranslationPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`TranslationModel`] - Trait for translation provider implementations
//! - [`DetectedLanguage`] - A detected language code with its confidence
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use textlab::pipelines::translation_pipeline::*;
//!
//! # tokio_test::block_on(async {
//! let pipeline = TranslationPipelineBuilder::libre_translate().build()?;
//!
//! let spanish = pipeline.translate("Good morning! How are you today?", "es").await?;
//! println!("es: {spanish}");
//!
//! let detected = pipeline.detect_language("Bonjour, comment allez-vous?").await?;
//! println!("{} (confidence: {:.2})", detected.language, detected.confidence);
//! # anyhow::Ok(())
//! # });
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::TranslationPipelineBuilder;
pub use model::{DetectedLanguage, TranslationModel};
pub use pipeline::TranslationPipeline;

pub use crate::models::implementations::libre_translate::{
    LibreTranslateModel, LibreTranslateOptions,
};
