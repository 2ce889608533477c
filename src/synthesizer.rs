//! Remote speech synthesis client.
//!
//! Posts SSML to a Polly-shaped `/v1/speech` endpoint and returns the raw
//! audio bytes. Voice, engine, language and output format come from config
//! and are fixed for the whole session. Failures are fatal; there are no
//! retries.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::error::DrillError;

/// Synthesis request body, field names per the service contract.
#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    #[serde(rename = "Engine")]
    engine: &'a str,
    #[serde(rename = "LanguageCode")]
    language_code: &'a str,
    #[serde(rename = "VoiceId")]
    voice_id: &'a str,
    #[serde(rename = "OutputFormat")]
    output_format: &'a str,
    #[serde(rename = "TextType")]
    text_type: &'a str,
    #[serde(rename = "Text")]
    text: &'a str,
}

/// Error body the service returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServiceError {
    message: String,
}

pub struct SpeechSynthesizer {
    client: Client,
    config: SynthesisConfig,
}

impl SpeechSynthesizer {
    pub fn new(config: SynthesisConfig) -> Result<Self, DrillError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| DrillError::Synthesis(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn speech_url(&self) -> String {
        format!("{}/v1/speech", self.config.endpoint)
    }

    /// Convert one markup string to audio bytes.
    pub async fn synthesize(&self, markup: &str) -> Result<Bytes, DrillError> {
        if markup.is_empty() {
            return Err(DrillError::Synthesis("markup text is empty".into()));
        }

        let request = SynthesizeRequest {
            engine: &self.config.engine,
            language_code: &self.config.language,
            voice_id: &self.config.voice,
            output_format: &self.config.output_format,
            text_type: "ssml",
            text: markup,
        };

        debug!(markup_len = markup.len(), voice = %self.config.voice, "requesting synthesis");

        let response = self
            .client
            .post(self.speech_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<ServiceError>(&body) {
                return Err(DrillError::Synthesis(err.message));
            }
            return Err(DrillError::Synthesis(format!("HTTP {status}: {body}")));
        }

        let audio = response.bytes().await?;
        debug!(audio_size = audio.len(), "synthesis complete");
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn synthesizer_for(server: &MockServer) -> SpeechSynthesizer {
        let config = SynthesisConfig {
            endpoint: server.uri(),
            ..Default::default()
        };
        SpeechSynthesizer::new(config).unwrap()
    }

    #[tokio::test]
    async fn synthesize_returns_audio_bytes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/speech"))
            .and(body_partial_json(serde_json::json!({
                "Engine": "standard",
                "LanguageCode": "en-GB",
                "VoiceId": "Brian",
                "OutputFormat": "mp3",
                "TextType": "ssml",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 512]))
            .expect(1)
            .mount(&server)
            .await;

        let synthesizer = synthesizer_for(&server);
        let audio = synthesizer
            .synthesize("<speak>test</speak>")
            .await
            .unwrap();

        assert_eq!(audio.len(), 512);
    }

    #[tokio::test]
    async fn synthesize_sends_the_markup_verbatim() {
        let server = MockServer::start().await;
        let markup = "<speak><say-as interpret-as='cardinal'>123</say-as></speak>";

        Mock::given(method("POST"))
            .and(path("/v1/speech"))
            .and(body_partial_json(serde_json::json!({ "Text": markup })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 16]))
            .expect(1)
            .mount(&server)
            .await;

        let synthesizer = synthesizer_for(&server);
        assert!(synthesizer.synthesize(markup).await.is_ok());
    }

    #[tokio::test]
    async fn service_error_message_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/speech"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "credentials missing"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let synthesizer = synthesizer_for(&server);
        match synthesizer.synthesize("<speak>x</speak>").await {
            Err(DrillError::Synthesis(msg)) => assert_eq!(msg, "credentials missing"),
            other => panic!("expected Synthesis error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_falls_back_to_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/speech"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let synthesizer = synthesizer_for(&server);
        match synthesizer.synthesize("<speak>x</speak>").await {
            Err(DrillError::Synthesis(msg)) => {
                assert!(msg.contains("500"), "message was: {msg}");
            }
            other => panic!("expected Synthesis error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_markup_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        let synthesizer = synthesizer_for(&server);

        let result = synthesizer.synthesize("").await;
        assert!(matches!(result, Err(DrillError::Synthesis(_))));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
