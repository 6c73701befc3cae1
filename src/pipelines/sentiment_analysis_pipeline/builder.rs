use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::models::implementations::vader::{VaderOptions, VaderSentimentModel};

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self { options }
    }

    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<M>> {
        let model = M::new(self.options)?;
        Ok(SentimentAnalysisPipeline { model })
    }
}

impl SentimentAnalysisPipelineBuilder<VaderSentimentModel> {
    /// Pipeline backed by the VADER lexicon scorer bundled with the crate.
    pub fn vader() -> Self {
        Self::new(VaderOptions)
    }
}
