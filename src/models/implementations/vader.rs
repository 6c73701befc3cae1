//! Sentiment provider backed by the VADER lexicon scorer.
//!
//! VADER is tuned for short social-media style text: it understands
//! intensifiers, negations, punctuation emphasis and emoji. The lexicon
//! ships with the crate, so scoring works offline and needs no setup.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::pipelines::sentiment_analysis_pipeline::model::{Sentiment, SentimentAnalysisModel};

/// Options for [`VaderSentimentModel`]. The bundled lexicon leaves nothing
/// to configure.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderOptions;

pub struct VaderSentimentModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalysisModel for VaderSentimentModel {
    type Options = VaderOptions;

    fn new(_options: VaderOptions) -> anyhow::Result<Self> {
        tracing::debug!("loading VADER lexicon scorer");
        Ok(Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        })
    }

    fn analyze(&self, text: &str) -> anyhow::Result<Sentiment> {
        let scores = self.analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        // Compound is the normalized overall score in [-1, 1]. The pos/neg/neu
        // values are the proportions of the text falling in each band and sum
        // to one, so the non-neutral share doubles as a subjectivity estimate.
        let sentiment = Sentiment {
            polarity: score("compound"),
            subjectivity: score("pos") + score("neg"),
        };
        tracing::trace!(
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            "scored text"
        );
        Ok(sentiment)
    }
}
