pub mod libre_translate;
pub mod segmenters;
pub mod vader;

pub use libre_translate::{LibreTranslateModel, LibreTranslateOptions};
pub use segmenters::{
    PatternTokenizerModel, SentenceTokenizerModel, WhitespaceTokenizerModel, WordTokenizerModel,
};
pub use vader::{VaderOptions, VaderSentimentModel};
