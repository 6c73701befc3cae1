use super::model::TokenizationModel;
use super::pipeline::TokenizationPipeline;
use crate::models::implementations::segmenters::{
    PatternTokenizerModel, SentenceTokenizerModel, WhitespaceTokenizerModel, WordTokenizerModel,
};

pub struct TokenizationPipelineBuilder<M: TokenizationModel> {
    options: M::Options,
}

impl<M: TokenizationModel> TokenizationPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self { options }
    }

    pub fn build(self) -> anyhow::Result<TokenizationPipeline<M>> {
        let model = M::new(self.options)?;
        Ok(TokenizationPipeline { model })
    }
}

impl TokenizationPipelineBuilder<WordTokenizerModel> {
    /// Words and punctuation runs become separate tokens.
    pub fn words() -> Self {
        Self::new(())
    }
}

impl TokenizationPipelineBuilder<WhitespaceTokenizerModel> {
    /// Split on whitespace only, keeping punctuation attached to words.
    pub fn whitespace() -> Self {
        Self::new(())
    }
}

impl TokenizationPipelineBuilder<SentenceTokenizerModel> {
    /// One token per sentence.
    pub fn sentences() -> Self {
        Self::new(())
    }
}

impl TokenizationPipelineBuilder<PatternTokenizerModel> {
    /// Tokens are the matches of `pattern`; the pattern is validated when
    /// the pipeline is built.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::new(pattern.into())
    }
}
