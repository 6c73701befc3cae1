// Integration tests for the translation pipeline, driven by an in-memory
// provider so no test touches the network.

use textlab::pipelines::translation_pipeline::*;

/// Fixture provider: a phrasebook of (text, target language, translation)
/// entries plus a fixed detection table.
#[derive(Debug, Clone)]
struct PhrasebookOptions {
    phrases: Vec<(&'static str, &'static str, &'static str)>,
    detections: Vec<(&'static str, &'static str, f32)>,
}

struct PhrasebookModel {
    options: PhrasebookOptions,
}

impl TranslationModel for PhrasebookModel {
    type Options = PhrasebookOptions;

    fn new(options: PhrasebookOptions) -> anyhow::Result<Self> {
        Ok(Self { options })
    }

    async fn translate(
        &self,
        text: &str,
        _source: Option<&str>,
        target: &str,
    ) -> anyhow::Result<String> {
        self.options
            .phrases
            .iter()
            .find(|(phrase, lang, _)| *phrase == text && *lang == target)
            .map(|(_, _, translation)| translation.to_string())
            .ok_or_else(|| anyhow::anyhow!("no translation for {text:?} into {target}"))
    }

    async fn detect(&self, text: &str) -> anyhow::Result<DetectedLanguage> {
        self.options
            .detections
            .iter()
            .find(|(phrase, _, _)| *phrase == text)
            .map(|(_, language, confidence)| DetectedLanguage {
                language: language.to_string(),
                confidence: *confidence,
            })
            .ok_or_else(|| anyhow::anyhow!("language of {text:?} not recognized"))
    }
}

fn phrasebook() -> PhrasebookOptions {
    PhrasebookOptions {
        phrases: vec![
            ("Good morning!", "es", "¡Buenos días!"),
            ("Good morning!", "fr", "Bonjour !"),
            ("¡Buenos días!", "en", "Good morning!"),
        ],
        detections: vec![
            ("Good morning!", "en", 0.92),
            ("¡Buenos días!", "es", 0.97),
        ],
    }
}

#[tokio::test]
async fn translates_into_a_target_language() -> anyhow::Result<()> {
    let pipeline = TranslationPipelineBuilder::<PhrasebookModel>::new(phrasebook()).build()?;

    let spanish = pipeline.translate("Good morning!", "es").await?;
    assert_eq!(spanish, "¡Buenos días!");

    let french = pipeline.translate_from("Good morning!", "en", "fr").await?;
    assert_eq!(french, "Bonjour !");

    Ok(())
}

#[tokio::test]
async fn round_trips_through_a_pivot_language() -> anyhow::Result<()> {
    let pipeline = TranslationPipelineBuilder::<PhrasebookModel>::new(phrasebook()).build()?;

    let spanish = pipeline.translate_from("Good morning!", "en", "es").await?;
    let back = pipeline.translate_from(&spanish, "es", "en").await?;
    assert_eq!(back, "Good morning!");

    Ok(())
}

#[tokio::test]
async fn detects_the_language_of_a_text() -> anyhow::Result<()> {
    let pipeline = TranslationPipelineBuilder::<PhrasebookModel>::new(phrasebook()).build()?;

    let detected = pipeline.detect_language("¡Buenos días!").await?;
    assert_eq!(detected.language, "es");
    assert!(detected.confidence > 0.9);

    Ok(())
}

#[tokio::test]
async fn provider_failures_reach_the_caller() {
    let pipeline = TranslationPipelineBuilder::<PhrasebookModel>::new(phrasebook())
        .build()
        .unwrap();

    let error = pipeline
        .translate("Good morning!", "ja")
        .await
        .expect_err("phrase is not in the book");
    assert!(error.to_string().contains("ja"));
}
