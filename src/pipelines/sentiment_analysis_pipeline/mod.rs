//! Sentiment analysis pipeline for scoring and classifying text emotional tone.
//!
//! A provider scores each text with a polarity (favorability) and a
//! subjectivity (opinion content) value; the classifier in this module maps
//! polarity onto three discrete categories and picks the extremes out of a
//! scored batch. Useful for customer feedback triage, review comparison,
//! and social media monitoring.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for scoring text
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for sentiment provider implementations
//! - [`SentimentCategory`] - Discrete category derived from a polarity score
//! - [`ScoredText`] - A text together with the scores it received
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use textlab::pipelines::sentiment_analysis_pipeline::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Create a sentiment analysis pipeline
//! let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;
//!
//! // Score a single text
//! let scored = pipeline.analyze("I love this product! It works perfectly.")?;
//! println!("{} (polarity: {:.3})", scored.category(), scored.polarity);
//!
//! // Score a batch and compare
//! let batch = pipeline.analyze_all(["Excellent work!", "Terrible service."])?;
//! let extremes = select_extremes(&batch)?;
//! println!("Most positive: {}", extremes.most_positive.text);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod classifier;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use classifier::{
    classify, select_extremes, Extremes, SentimentCategory, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use model::{Sentiment, SentimentAnalysisModel};
pub use pipeline::{ScoredText, SentimentAnalysisPipeline};

pub use crate::core::EmptyInputError;

pub use anyhow::Result;
