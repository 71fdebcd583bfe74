use async_trait::async_trait;
use std::sync::Arc;

use super::language::Language;
use super::model::Diagnosis;
use super::prompt::build_instruction;
use super::response::parse_diagnosis;
use super::wire::{ChatRequest, ChatResponse};
use crate::capture::EncodedImage;
use crate::config::{Config, MAX_RESPONSE_TOKENS};
use crate::error::{excerpt, ConfigError, DiagnoseError, InferenceError};

/// Something that maps (instruction, image) to free-form text.
///
/// One call, one attempt: implementations must not retry on their own.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn complete(
        &self,
        instruction: &str,
        image: &EncodedImage,
    ) -> Result<String, InferenceError>;
}

/// OpenAI-compatible chat completions over HTTPS
pub struct OpenAiProvider {
    http: reqwest::Client,
    config: Config,
}

impl OpenAiProvider {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self { http, config })
    }

    /// Request body for one diagnosis
    pub fn build_request(&self, instruction: &str, image: &EncodedImage) -> ChatRequest {
        ChatRequest::single_image(
            &self.config.model,
            instruction,
            image.data_uri(),
            MAX_RESPONSE_TOKENS,
        )
    }
}

#[async_trait]
impl InferenceProvider for OpenAiProvider {
    async fn complete(
        &self,
        instruction: &str,
        image: &EncodedImage,
    ) -> Result<String, InferenceError> {
        let request = self.build_request(instruction, image);

        log::debug!(
            "POST {} (model {}, max_tokens {})",
            self.config.completions_url(),
            self.config.model,
            MAX_RESPONSE_TOKENS
        );

        let response = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(InferenceError::Transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status,
                body: excerpt(&body),
            });
        }

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedEnvelope(e.to_string()))?;

        envelope.into_text().ok_or(InferenceError::EmptyCompletion)
    }
}

/// Builds the instruction, calls the provider, parses the reply.
/// Holds no state between calls.
#[derive(Clone)]
pub struct DiagnosisClient {
    provider: Arc<dyn InferenceProvider>,
}

impl DiagnosisClient {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self { provider }
    }

    /// Diagnose one photo in the given language
    pub async fn diagnose(
        &self,
        image: &EncodedImage,
        language: Language,
    ) -> Result<Diagnosis, DiagnoseError> {
        let instruction = build_instruction(language);

        log::info!(
            "🌿 Requesting diagnosis in {} ({} KB {})",
            language.code(),
            image.encoded_len() / 1024,
            image.mime_type()
        );

        let text = self
            .provider
            .complete(&instruction, image)
            .await
            .map_err(|e| {
                log::error!("❌ Inference failed: {}", e);
                e
            })?;

        log::debug!("Provider replied with {} chars", text.len());

        let diagnosis = parse_diagnosis(&text).map_err(|e| {
            log::error!("❌ Unusable diagnosis from provider: {}", e);
            e
        })?;

        log::info!(
            "✅ Diagnosis ready: {} ({}), healthy = {}",
            diagnosis.flower_identification.species,
            diagnosis.flower_identification.latin_name,
            diagnosis.is_healthy
        );

        Ok(diagnosis)
    }
}
