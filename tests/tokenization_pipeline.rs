// Integration tests for the tokenization pipeline and its four providers.

use textlab::pipelines::tokenization_pipeline::*;

#[test]
fn splits_words_and_punctuation() -> anyhow::Result<()> {
    let pipeline = TokenizationPipelineBuilder::words().build()?;
    let tokens = pipeline.tokenize("Hello! Welcome to NLP practice.")?;
    assert_eq!(
        tokens,
        ["Hello", "!", "Welcome", "to", "NLP", "practice", "."]
    );
    Ok(())
}

#[test]
fn whitespace_mode_keeps_punctuation_attached() -> anyhow::Result<()> {
    let pipeline = TokenizationPipelineBuilder::whitespace().build()?;
    let tokens = pipeline.tokenize("Don't worry! We'll learn NLP step-by-step.")?;
    assert_eq!(
        tokens,
        ["Don't", "worry!", "We'll", "learn", "NLP", "step-by-step."]
    );
    Ok(())
}

#[test]
fn segments_sentences() -> anyhow::Result<()> {
    let pipeline = TokenizationPipelineBuilder::sentences().build()?;
    let tokens = pipeline.tokenize(
        "Natural Language Processing is fascinating. It helps computers understand human language. We can do many things with NLP!",
    )?;
    assert_eq!(
        tokens,
        [
            "Natural Language Processing is fascinating.",
            "It helps computers understand human language.",
            "We can do many things with NLP!",
        ]
    );
    Ok(())
}

#[test]
fn extracts_pattern_matches() -> anyhow::Result<()> {
    let pipeline = TokenizationPipelineBuilder::pattern(r"\S+@\S+").build()?;
    let tokens = pipeline.tokenize("Email me at user@example.com or call 123-456-7890")?;
    assert_eq!(tokens, ["user@example.com"]);
    Ok(())
}

#[test]
fn rejects_invalid_pattern_at_build_time() {
    assert!(TokenizationPipelineBuilder::pattern("(unclosed").build().is_err());
}

#[test]
fn empty_text_yields_no_tokens() -> anyhow::Result<()> {
    let sentences = TokenizationPipelineBuilder::sentences().build()?;
    assert!(sentences.tokenize("")?.is_empty());

    let pattern = TokenizationPipelineBuilder::pattern(r"\w+").build()?;
    assert!(pattern.tokenize("")?.is_empty());

    Ok(())
}
