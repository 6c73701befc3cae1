//! Tokenization providers: thin adapters over external segmentation
//! libraries.
//!
//! Word and whitespace segmentation delegate to the `tokenizers` crate's
//! pre-tokenizers, sentence segmentation to the UAX #29 rules in
//! `unicode-segmentation`, and pattern segmentation to the `regex` crate.

use regex::Regex;
use tokenizers::pre_tokenizers::whitespace::{Whitespace, WhitespaceSplit};
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};
use unicode_segmentation::UnicodeSegmentation;

use crate::pipelines::tokenization_pipeline::model::TokenizationModel;

fn pre_tokenize(splitter: &impl PreTokenizer, text: &str) -> anyhow::Result<Vec<String>> {
    let mut pretokenized = PreTokenizedString::from(text);
    splitter
        .pre_tokenize(&mut pretokenized)
        .map_err(anyhow::Error::msg)?;
    Ok(pretokenized
        .get_splits(OffsetReferential::Original, OffsetType::Char)
        .into_iter()
        .map(|(token, _, _)| token.to_string())
        .collect())
}

/// Words and punctuation runs as separate tokens (`\w+|[^\w\s]+`).
#[derive(Debug, Clone)]
pub struct WordTokenizerModel;

impl TokenizationModel for WordTokenizerModel {
    type Options = ();

    fn new(_options: ()) -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>> {
        pre_tokenize(&Whitespace, text)
    }
}

/// Splits on whitespace only; punctuation stays attached to words.
#[derive(Debug, Clone)]
pub struct WhitespaceTokenizerModel;

impl TokenizationModel for WhitespaceTokenizerModel {
    type Options = ();

    fn new(_options: ()) -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>> {
        pre_tokenize(&WhitespaceSplit, text)
    }
}

/// One token per sentence, per the UAX #29 boundary rules.
#[derive(Debug, Clone)]
pub struct SentenceTokenizerModel;

impl TokenizationModel for SentenceTokenizerModel {
    type Options = ();

    fn new(_options: ()) -> anyhow::Result<Self> {
        Ok(Self)
    }

    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>> {
        // Boundary segments keep their trailing separator whitespace;
        // callers expect clean sentences, so trim it away and drop
        // segments that were nothing but whitespace.
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Tokens are the matches of a caller-supplied regular expression.
#[derive(Debug, Clone)]
pub struct PatternTokenizerModel {
    pattern: Regex,
}

impl TokenizationModel for PatternTokenizerModel {
    type Options = String;

    fn new(options: String) -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(&options)?,
        })
    }

    fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .pattern
            .find_iter(text)
            .map(|found| found.as_str().to_string())
            .collect())
    }
}
