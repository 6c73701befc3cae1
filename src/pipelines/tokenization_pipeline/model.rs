/// Trait for segmentation provider implementations.
pub trait TokenizationModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Segment `text` into tokens, preserving input order.
    ///
    /// Empty input yields an empty token list, not an error.
    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>>;
}
