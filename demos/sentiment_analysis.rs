use anyhow::Result;
use textlab::pipelines::sentiment_analysis_pipeline::*;

fn main() -> Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::vader().build()?;

    println!("{}", "=".repeat(60));
    println!("BASIC SENTIMENT ANALYSIS");
    println!("{}", "=".repeat(60));

    let texts = [
        "I love this product! It's amazing and works perfectly.",
        "This is the worst experience I've ever had. Terrible service!",
        "The weather is okay today.",
        "I am very happy with the results. Excellent work!",
        "I hate waiting in long queues. It's so frustrating.",
    ];

    for text in texts {
        let scored = pipeline.analyze(text)?;
        println!("\nText: {}", scored.text);
        println!("Polarity: {:.3} ({})", scored.polarity, scored.category());
        println!("Subjectivity: {:.3}", scored.subjectivity);
    }

    println!("\n{}", "=".repeat(60));
    println!("COMPARING SENTIMENTS");
    println!("{}", "=".repeat(60));

    let reviews = pipeline.analyze_all([
        "The movie was fantastic! I really enjoyed every moment.",
        "The movie was okay. Nothing special.",
        "The movie was boring and disappointing.",
    ])?;

    for scored in &reviews {
        println!("\nText: {}", scored.text);
        println!(
            "Sentiment: {} (polarity: {:.3})",
            scored.category(),
            scored.polarity
        );
    }

    let extremes = select_extremes(&reviews)?;
    println!("\n{}", "-".repeat(60));
    println!("Most positive: {}", extremes.most_positive.text);
    println!("Most negative: {}", extremes.most_negative.text);

    println!("\n{}", "=".repeat(60));
    println!("ANALYZE YOUR OWN TEXT");
    println!("{}", "=".repeat(60));

    let sample =
        "Natural Language Processing is incredibly powerful and useful for many applications.";
    let scored = pipeline.analyze(sample)?;
    println!("\nSample text: {}", scored.text);
    println!(
        "Polarity: {:.3} ({}), subjectivity: {:.3}",
        scored.polarity,
        scored.category(),
        scored.subjectivity
    );
    if scored.is_subjective() {
        println!("Note: this text is quite subjective (opinion-based)");
    } else {
        println!("Note: this text is relatively objective (fact-based)");
    }

    Ok(())
}
