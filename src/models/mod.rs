pub mod implementations;

pub use implementations::{
    LibreTranslateModel, LibreTranslateOptions, PatternTokenizerModel, SentenceTokenizerModel,
    VaderOptions, VaderSentimentModel, WhitespaceTokenizerModel, WordTokenizerModel,
};
