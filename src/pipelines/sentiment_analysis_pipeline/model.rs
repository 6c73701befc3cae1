/// Raw scores returned by a sentiment provider for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    /// Favorability in `[-1.0, 1.0]`; negative is unfavorable, magnitude is
    /// strength.
    pub polarity: f64,
    /// Opinion content in `[0.0, 1.0]`; high values mean opinion-based text,
    /// low values mean factual text.
    pub subjectivity: f64,
}

/// Trait for sentiment provider implementations.
///
/// Scores are best-effort statistical estimates; the same text may score
/// differently across provider versions.
pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> anyhow::Result<Self>
    where
        Self: Sized;

    fn analyze(&self, text: &str) -> anyhow::Result<Sentiment>;
}
