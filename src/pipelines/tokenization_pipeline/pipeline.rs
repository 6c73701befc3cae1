use super::model::TokenizationModel;

pub struct TokenizationPipeline<M: TokenizationModel> {
    pub(crate) model: M,
}

impl<M: TokenizationModel> TokenizationPipeline<M> {
    /// Segment `text` with the underlying provider.
    pub fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>> {
        self.model.tokenize(text)
    }
}
