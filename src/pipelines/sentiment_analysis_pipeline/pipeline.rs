use super::classifier::{classify, SentimentCategory};
use super::model::SentimentAnalysisModel;

/// A text together with the scores its provider assigned.
///
/// Immutable once created; only value equality matters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredText {
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

impl ScoredText {
    /// Category derived from the polarity score.
    pub fn category(&self) -> SentimentCategory {
        classify(self.polarity)
    }

    /// Whether the text reads as opinion rather than fact.
    pub fn is_subjective(&self) -> bool {
        self.subjectivity > 0.5
    }
}

pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Score a single text with the underlying provider.
    ///
    /// Empty or whitespace-only input is rejected; a [`ScoredText`] always
    /// carries a non-empty text.
    pub fn analyze(&self, text: &str) -> anyhow::Result<ScoredText> {
        if text.trim().is_empty() {
            anyhow::bail!("cannot score an empty text");
        }
        let sentiment = self.model.analyze(text)?;
        Ok(ScoredText {
            text: text.to_string(),
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
        })
    }

    /// Score every text in input order, failing on the first provider error.
    pub fn analyze_all<I, S>(&self, texts: I) -> anyhow::Result<Vec<ScoredText>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}
