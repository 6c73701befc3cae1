use anyhow::Result;
use textlab::pipelines::tokenization_pipeline::*;

fn main() -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("WORD TOKENIZATION");
    println!("{}", "=".repeat(60));

    let text = "Hello! Welcome to NLP practice. Let's learn tokenization.";
    let words = TokenizationPipelineBuilder::words().build()?;
    let tokens = words.tokenize(text)?;
    println!("Text: {text}");
    println!("Tokens: {tokens:?}");
    println!("Number of tokens: {}", tokens.len());

    println!("\n{}", "=".repeat(60));
    println!("WHITESPACE TOKENIZATION");
    println!("{}", "=".repeat(60));

    let text = "Don't worry! We'll learn NLP step-by-step.";
    let whitespace = TokenizationPipelineBuilder::whitespace().build()?;
    let tokens = whitespace.tokenize(text)?;
    println!("Text: {text}");
    println!("Tokens: {tokens:?}");
    println!("Number of tokens: {}", tokens.len());

    println!("\n{}", "=".repeat(60));
    println!("SENTENCE TOKENIZATION");
    println!("{}", "=".repeat(60));

    let text = "Natural Language Processing is fascinating. It helps computers understand human language. We can do many things with NLP!";
    let sentences = TokenizationPipelineBuilder::sentences().build()?;
    let tokens = sentences.tokenize(text)?;
    println!("Text: {text}\n");
    for (i, sentence) in tokens.iter().enumerate() {
        println!("  {}. {sentence}", i + 1);
    }
    println!("\nNumber of sentences: {}", tokens.len());

    println!("\n{}", "=".repeat(60));
    println!("PATTERN TOKENIZATION");
    println!("{}", "=".repeat(60));

    let text = "Email me at user@example.com or call 123-456-7890";
    let word_pattern = TokenizationPipelineBuilder::pattern(r"\w+").build()?;
    let email_pattern = TokenizationPipelineBuilder::pattern(r"\S+@\S+").build()?;
    println!("Text: {text}");
    println!("Word tokens: {:?}", word_pattern.tokenize(text)?);
    println!("Email tokens: {:?}", email_pattern.tokenize(text)?);

    Ok(())
}
