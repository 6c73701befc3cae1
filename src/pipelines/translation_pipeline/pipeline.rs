use super::model::{DetectedLanguage, TranslationModel};

pub struct TranslationPipeline<M: TranslationModel> {
    pub(crate) model: M,
}

impl<M: TranslationModel> TranslationPipeline<M> {
    /// Translate `text` into `target`, letting the provider detect the
    /// source language.
    pub async fn translate(&self, text: &str, target: &str) -> anyhow::Result<String> {
        self.model.translate(text, None, target).await
    }

    /// Translate `text` from an explicit `source` language into `target`.
    pub async fn translate_from(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> anyhow::Result<String> {
        self.model.translate(text, Some(source), target).await
    }

    /// Identify the language `text` is written in.
    pub async fn detect_language(&self, text: &str) -> anyhow::Result<DetectedLanguage> {
        self.model.detect(text).await
    }
}
