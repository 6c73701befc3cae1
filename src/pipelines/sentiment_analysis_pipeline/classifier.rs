use super::pipeline::ScoredText;
use crate::core::EmptyInputError;

/// Polarity strictly above this value classifies as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity strictly below this value classifies as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Discrete sentiment category derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Returns the string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a polarity score to a sentiment category.
///
/// The band between [`NEGATIVE_THRESHOLD`] and [`POSITIVE_THRESHOLD`],
/// inclusive on both ends, maps to `Neutral`: the underlying estimators
/// rarely produce an exact zero for neutral text, so a dead zone around
/// zero absorbs that noise. Total over all inputs, including values
/// outside `[-1.0, 1.0]`.
pub fn classify(polarity: f64) -> SentimentCategory {
    if polarity > POSITIVE_THRESHOLD {
        SentimentCategory::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

/// The most and least favorable entries of a scored batch.
#[derive(Debug, Clone, Copy)]
pub struct Extremes<'a> {
    pub most_positive: &'a ScoredText,
    pub most_negative: &'a ScoredText,
}

/// Select the highest- and lowest-polarity entries of `scored`.
///
/// When several entries share the extreme polarity, the earliest one in
/// input order wins for both extremes. The input is only read.
pub fn select_extremes(scored: &[ScoredText]) -> Result<Extremes<'_>, EmptyInputError> {
    let (first, rest) = scored.split_first().ok_or(EmptyInputError)?;
    let mut most_positive = first;
    let mut most_negative = first;
    for item in rest {
        if item.polarity > most_positive.polarity {
            most_positive = item;
        }
        if item.polarity < most_negative.polarity {
            most_negative = item;
        }
    }
    Ok(Extremes {
        most_positive,
        most_negative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str, polarity: f64) -> ScoredText {
        ScoredText {
            text: text.to_string(),
            polarity,
            subjectivity: 0.0,
        }
    }

    #[test]
    fn positive_above_threshold() {
        assert_eq!(classify(0.5), SentimentCategory::Positive);
        assert_eq!(classify(0.1 + f64::EPSILON), SentimentCategory::Positive);
        assert_eq!(classify(2.0), SentimentCategory::Positive);
    }

    #[test]
    fn negative_below_threshold() {
        assert_eq!(classify(-0.5), SentimentCategory::Negative);
        assert_eq!(classify(-0.1 - f64::EPSILON), SentimentCategory::Negative);
        assert_eq!(classify(-2.0), SentimentCategory::Negative);
    }

    #[test]
    fn dead_zone_is_neutral() {
        assert_eq!(classify(0.0), SentimentCategory::Neutral);
        assert_eq!(classify(0.05), SentimentCategory::Neutral);
        assert_eq!(classify(-0.05), SentimentCategory::Neutral);
    }

    #[test]
    fn boundaries_are_neutral() {
        assert_eq!(classify(POSITIVE_THRESHOLD), SentimentCategory::Neutral);
        assert_eq!(classify(NEGATIVE_THRESHOLD), SentimentCategory::Neutral);
    }

    #[test]
    fn classification_is_stable() {
        for polarity in [-0.3, 0.0, 0.7] {
            assert_eq!(classify(polarity), classify(polarity));
        }
    }

    #[test]
    fn extremes_pick_max_and_min() {
        let batch = [scored("a", 0.9), scored("b", -0.5), scored("c", 0.2)];
        let extremes = select_extremes(&batch).unwrap();
        assert_eq!(extremes.most_positive.text, "a");
        assert_eq!(extremes.most_negative.text, "b");
    }

    #[test]
    fn ties_keep_the_first_occurrence() {
        let batch = [scored("x", 0.5), scored("y", 0.5)];
        let extremes = select_extremes(&batch).unwrap();
        assert_eq!(extremes.most_positive.text, "x");
        assert_eq!(extremes.most_negative.text, "x");
    }

    #[test]
    fn single_element_is_both_extremes() {
        let batch = [scored("only", -0.2)];
        let extremes = select_extremes(&batch).unwrap();
        assert_eq!(extremes.most_positive.text, "only");
        assert_eq!(extremes.most_negative.text, "only");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(select_extremes(&[]).unwrap_err(), EmptyInputError);
    }
}
