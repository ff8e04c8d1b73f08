//! Recommendation Client: turns a frozen response set into narrative advice.
//!
//! Flow: render prompt template → one `TextGenerator` call → `Recommendation`.
//! Generation failures never escape as errors; they become `Recommendation::Failed`
//! so the caller always has text to show.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};
use crate::survey::collector::ResponseSet;
use crate::survey::schema::SurveyConfig;
use crate::survey::template::render;

#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Generated(String),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Generated,
    Failed,
}

impl Recommendation {
    pub fn status(&self) -> RecommendationStatus {
        match self {
            Recommendation::Generated(_) => RecommendationStatus::Generated,
            Recommendation::Failed(_) => RecommendationStatus::Failed,
        }
    }

    /// Collapses the result into displayable text.
    pub fn into_text(self) -> String {
        match self {
            Recommendation::Generated(text) => text,
            Recommendation::Failed(reason) => format!(
                "Error generating recommendation: {reason}. Please check your API key and try again."
            ),
        }
    }
}

#[derive(Clone)]
pub struct Recommender {
    generator: Arc<dyn TextGenerator>,
    survey: Arc<SurveyConfig>,
}

impl Recommender {
    pub fn new(generator: Arc<dyn TextGenerator>, survey: Arc<SurveyConfig>) -> Self {
        Self { generator, survey }
    }

    pub fn build_request(&self, responses: &ResponseSet) -> CompletionRequest {
        CompletionRequest {
            model: self.survey.model.clone(),
            system: self.survey.system_prompt.clone(),
            prompt: render(&self.survey.prompt_template, responses),
            max_tokens: self.survey.max_tokens,
            temperature: self.survey.temperature,
        }
    }

    /// Exactly one generation call per invocation.
    pub async fn recommend(&self, responses: ResponseSet) -> Recommendation {
        let request = self.build_request(&responses);

        let result = self
            .generator
            .complete(&request)
            .await
            .and_then(|text| match text.trim() {
                "" => Err(LlmError::EmptyContent),
                trimmed => Ok(trimmed.to_string()),
            });

        match result {
            Ok(text) => {
                info!(
                    "Generated recommendation ({} chars) with {}",
                    text.len(),
                    request.model
                );
                Recommendation::Generated(text)
            }
            Err(e) => {
                warn!("Recommendation generation failed: {e}");
                Recommendation::Failed(e.to_string())
            }
        }
    }
}
