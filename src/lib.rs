pub mod core;
pub mod models;
pub mod pipelines;

// Re-export the classifier surface at the crate root so callers can write
// `use textlab::{classify, SentimentCategory}` without digging through the
// pipeline modules.
pub use crate::core::EmptyInputError;
pub use crate::pipelines::sentiment_analysis_pipeline::{
    classify, select_extremes, Extremes, ScoredText, SentimentCategory,
};

// Re-export provider types for easier access
pub use models::implementations::{
    LibreTranslateModel,
    LibreTranslateOptions,
    PatternTokenizerModel,
    SentenceTokenizerModel,
    VaderSentimentModel,
    WhitespaceTokenizerModel,
    WordTokenizerModel,
};
