//! Translation provider speaking the LibreTranslate HTTP API.
//!
//! Works against the public instance or any self-hosted
//! LibreTranslate-compatible server. Requests are JSON POSTs; failures
//! (network, HTTP status, malformed body) surface as errors to the caller.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::pipelines::translation_pipeline::model::{DetectedLanguage, TranslationModel};

/// Connection settings for a LibreTranslate-compatible server.
#[derive(Debug, Clone)]
pub struct LibreTranslateOptions {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for LibreTranslateOptions {
    fn default() -> Self {
        Self {
            base_url: "https://libretranslate.com".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
    confidence: f32,
}

pub struct LibreTranslateModel {
    http: Client,
    options: LibreTranslateOptions,
}

impl LibreTranslateModel {
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.options.base_url.trim_end_matches('/'), path)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> anyhow::Result<R>
    where
        B: Serialize,
        R: for<'de> Deserialize<'de>,
    {
        let url = self.endpoint(path);
        tracing::debug!(%url, "posting to translation provider");
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("translation provider returned {status}: {detail}");
        }
        Ok(response.json().await?)
    }
}

impl TranslationModel for LibreTranslateModel {
    type Options = LibreTranslateOptions;

    fn new(options: LibreTranslateOptions) -> anyhow::Result<Self> {
        tracing::debug!(base_url = %options.base_url, "creating LibreTranslate client");
        Ok(Self {
            http: Client::new(),
            options,
        })
    }

    async fn translate(
        &self,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> anyhow::Result<String> {
        let request = TranslateRequest {
            q: text,
            // `auto` asks the server to run language detection first.
            source: source.unwrap_or("auto"),
            target,
            format: "text",
            api_key: self.options.api_key.as_deref(),
        };
        let response: TranslateResponse = self.post("translate", &request).await?;
        Ok(response.translated_text)
    }

    async fn detect(&self, text: &str) -> anyhow::Result<DetectedLanguage> {
        let request = DetectRequest {
            q: text,
            api_key: self.options.api_key.as_deref(),
        };
        let detections: Vec<Detection> = self.post("detect", &request).await?;
        let best = detections
            .into_iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
            .ok_or_else(|| anyhow::anyhow!("provider returned no language detections"))?;
        Ok(DetectedLanguage {
            language: best.language,
            confidence: best.confidence,
        })
    }
}
