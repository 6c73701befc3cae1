use super::model::TranslationModel;
use super::pipeline::TranslationPipeline;
use crate::models::implementations::libre_translate::{LibreTranslateModel, LibreTranslateOptions};

pub struct TranslationPipelineBuilder<M: TranslationModel> {
    options: M::Options,
}

impl<M: TranslationModel> TranslationPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self { options }
    }

    pub fn build(self) -> anyhow::Result<TranslationPipeline<M>> {
        let model = M::new(self.options)?;
        Ok(TranslationPipeline { model })
    }
}

impl TranslationPipelineBuilder<LibreTranslateModel> {
    /// Provider speaking the LibreTranslate HTTP API, pointed at the
    /// public instance by default.
    pub fn libre_translate() -> Self {
        Self::new(LibreTranslateOptions::default())
    }

    /// Point the provider at a different LibreTranslate-compatible server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.base_url = url.into();
        self
    }

    /// API key for servers that require one.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.options.api_key = Some(key.into());
        self
    }
}
