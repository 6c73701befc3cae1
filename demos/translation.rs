use anyhow::Result;
use textlab::pipelines::translation_pipeline::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Point TEXTLAB_TRANSLATE_URL at a self-hosted server to avoid the
    // public instance's rate limits.
    let mut builder = TranslationPipelineBuilder::libre_translate();
    if let Ok(url) = std::env::var("TEXTLAB_TRANSLATE_URL") {
        builder = builder.base_url(url);
    }
    let pipeline = builder.build()?;

    println!("{}", "=".repeat(60));
    println!("ENGLISH TO MULTIPLE LANGUAGES");
    println!("{}", "=".repeat(60));

    let english = "Hello! Welcome to Natural Language Processing.";
    println!("\nOriginal text (English): {english}\n");

    let languages = [
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
    ];

    for (code, name) in languages {
        match pipeline.translate_from(english, "en", code).await {
            Ok(translated) => println!("{name} ({code}): {translated}"),
            Err(error) => println!("{name} ({code}): translation error: {error}"),
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("LANGUAGE DETECTION");
    println!("{}", "=".repeat(60));
    println!();

    let samples = [
        "Hello, how are you?",
        "Bonjour, comment allez-vous?",
        "Hola, ¿cómo estás?",
        "Guten Tag, wie geht es Ihnen?",
        "Ciao, come stai?",
    ];

    for text in samples {
        match pipeline.detect_language(text).await {
            Ok(detected) => println!(
                "{text}\n  -> {} (confidence: {:.2})",
                detected.language, detected.confidence
            ),
            Err(error) => println!("{text}\n  -> detection error: {error}"),
        }
    }

    Ok(())
}
