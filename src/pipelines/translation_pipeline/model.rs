/// A detected language with the provider's confidence in it.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    /// ISO 639-1 code, e.g. `en` or `es`.
    pub language: String,
    pub confidence: f32,
}

/// Trait for translation provider implementations.
///
/// Providers are typically network-backed, so the operations are async;
/// the caller supplies the runtime.
pub trait TranslationModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Translate `text` into `target`. A `source` of `None` asks the
    /// provider to detect the source language itself.
    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> anyhow::Result<String>;

    /// Identify the language `text` is written in.
    async fn detect(&self, text: &str) -> anyhow::Result<DetectedLanguage>;
}
