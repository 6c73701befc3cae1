// Pipeline modules organized by capability
pub mod sentiment_analysis_pipeline;
pub mod tokenization_pipeline;
pub mod translation_pipeline;

// Re-export pipeline types for convenience
pub use sentiment_analysis_pipeline::*;
pub use tokenization_pipeline::*;
pub use translation_pipeline::*;
