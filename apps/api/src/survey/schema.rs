//! Survey schema: question definitions and the per-variant pipeline config.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::survey::template::{is_valid_key, malformed_placeholders, placeholders};

/// A single survey question. `choices: None` means free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    /// Display grouping only; never consulted by validation.
    pub section: String,
    pub choices: Option<Vec<String>>,
    pub required: bool,
}

impl Question {
    pub fn choice(id: &str, section: &str, prompt: &str, choices: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            section: section.to_string(),
            choices: Some(choices.iter().map(|c| c.to_string()).collect()),
            required: true,
        }
    }

    pub fn free_text(id: &str, section: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            section: section.to_string(),
            choices: None,
            required: true,
        }
    }

    pub fn is_free_text(&self) -> bool {
        self.choices.is_none()
    }

    pub fn accepts(&self, value: &str) -> bool {
        match &self.choices {
            Some(choices) => choices.iter().any(|c| c == value),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyVariant {
    /// PESTLE survey for any job seeker looking at South Korea.
    General,
    /// Survey tailored to Indian college students.
    Indoro,
}

impl SurveyVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyVariant::General => "general",
            SurveyVariant::Indoro => "indoro",
        }
    }
}

impl fmt::Display for SurveyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurveyVariant {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(SurveyVariant::General),
            "indoro" => Ok(SurveyVariant::Indoro),
            other => Err(SchemaError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("unknown survey variant '{0}' (expected 'general' or 'indoro')")]
    UnknownVariant(String),

    #[error("survey has no questions")]
    NoQuestions,

    #[error("duplicate question id '{0}'")]
    DuplicateId(String),

    #[error("question id '{0}' must be lowercase letters, digits and underscores, starting with a letter")]
    InvalidId(String),

    #[error("question '{0}' declares an empty choice set")]
    EmptyChoices(String),

    #[error("question '{question}' lists choice '{choice}' more than once")]
    DuplicateChoice { question: String, choice: String },

    #[error("prompt template references '{{{0}}}' but no question has that id")]
    UnknownTemplateKey(String),

    #[error("prompt template contains '{{{0}}}', which is not a valid placeholder")]
    MalformedPlaceholder(String),

    #[error("max_tokens must be greater than zero")]
    ZeroMaxTokens,

    #[error("temperature {0} is outside 0.0..=2.0")]
    TemperatureOutOfRange(f32),
}

/// Everything that distinguishes one survey variant from another.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyConfig {
    pub variant: SurveyVariant,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(skip)]
    pub prompt_template: String,
    #[serde(skip)]
    pub system_prompt: Option<String>,
    #[serde(skip)]
    pub model: String,
    #[serde(skip)]
    pub max_tokens: u32,
    #[serde(skip)]
    pub temperature: f32,
}

impl SurveyConfig {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Checks the schema and the prompt template against each other.
    /// Called once at startup; a failure aborts the process.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.questions.is_empty() {
            return Err(SchemaError::NoQuestions);
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !is_valid_key(&question.id) {
                return Err(SchemaError::InvalidId(question.id.clone()));
            }
            if !ids.insert(question.id.as_str()) {
                return Err(SchemaError::DuplicateId(question.id.clone()));
            }
            if let Some(choices) = &question.choices {
                if choices.is_empty() {
                    return Err(SchemaError::EmptyChoices(question.id.clone()));
                }
                let mut seen = HashSet::new();
                for choice in choices {
                    if !seen.insert(choice.as_str()) {
                        return Err(SchemaError::DuplicateChoice {
                            question: question.id.clone(),
                            choice: choice.clone(),
                        });
                    }
                }
            }
        }

        if let Some(token) = malformed_placeholders(&self.prompt_template).into_iter().next() {
            return Err(SchemaError::MalformedPlaceholder(token));
        }
        for key in placeholders(&self.prompt_template) {
            if self.question(&key).is_none() {
                return Err(SchemaError::UnknownTemplateKey(key));
            }
        }

        if self.max_tokens == 0 {
            return Err(SchemaError::ZeroMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(SchemaError::TemperatureOutOfRange(self.temperature));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(questions: Vec<Question>, template: &str) -> SurveyConfig {
        SurveyConfig {
            variant: SurveyVariant::General,
            title: "Test".to_string(),
            questions,
            prompt_template: template.to_string(),
            system_prompt: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 100,
            temperature: 0.5,
        }
    }

    #[test]
    fn test_variant_parses_case_insensitively() {
        assert_eq!("General".parse::<SurveyVariant>(), Ok(SurveyVariant::General));
        assert_eq!(" indoro ".parse::<SurveyVariant>(), Ok(SurveyVariant::Indoro));
        assert!(matches!(
            "pestle".parse::<SurveyVariant>(),
            Err(SchemaError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_valid_config_passes() {
        let cfg = config(
            vec![
                Question::choice("q1", "S", "Pick", &["A", "B"]),
                Question::free_text("q2", "S", "Name"),
            ],
            "Answer: {q1} from {q2}",
        );
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_template_key_without_question_is_rejected() {
        let cfg = config(
            vec![Question::choice("q1", "S", "Pick", &["A"])],
            "{q1} and {regulatory_comfort}",
        );
        assert_eq!(
            cfg.validate(),
            Err(SchemaError::UnknownTemplateKey("regulatory_comfort".to_string()))
        );
    }

    #[test]
    fn test_near_miss_template_keys_are_rejected() {
        let cfg = config(
            vec![Question::choice("q1", "S", "Pick", &["A"])],
            "{q1} and {Regulatory_comfort} and {visa-status}",
        );
        assert_eq!(
            cfg.validate(),
            Err(SchemaError::MalformedPlaceholder("Regulatory_comfort".to_string()))
        );

        let cfg = config(
            vec![Question::choice("q1", "S", "Pick", &["A"])],
            "{q1} and {visa-status}",
        );
        assert_eq!(
            cfg.validate(),
            Err(SchemaError::MalformedPlaceholder("visa-status".to_string()))
        );
    }

    #[test]
    fn test_ids_outside_placeholder_grammar_are_rejected() {
        let cfg = config(vec![Question::choice("Q1", "S", "Pick", &["A"])], "answer={Q1}");
        assert_eq!(cfg.validate(), Err(SchemaError::InvalidId("Q1".to_string())));

        let cfg = config(vec![Question::free_text("visa-status", "S", "Visa")], "");
        assert_eq!(
            cfg.validate(),
            Err(SchemaError::InvalidId("visa-status".to_string()))
        );
    }

    #[test]
    fn test_json_braces_in_template_are_allowed() {
        let cfg = config(
            vec![Question::choice("q1", "S", "Pick", &["A"])],
            "Reply as { \"job\": \"...\" } for {q1}",
        );
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let cfg = config(
            vec![
                Question::choice("q1", "S", "Pick", &["A"]),
                Question::free_text("q1", "S", "Again"),
            ],
            "",
        );
        assert_eq!(cfg.validate(), Err(SchemaError::DuplicateId("q1".to_string())));
    }

    #[test]
    fn test_empty_choice_set_rejected() {
        let cfg = config(vec![Question::choice("q1", "S", "Pick", &[])], "");
        assert_eq!(cfg.validate(), Err(SchemaError::EmptyChoices("q1".to_string())));
    }

    #[test]
    fn test_duplicate_choice_rejected() {
        let cfg = config(vec![Question::choice("q1", "S", "Pick", &["A", "A"])], "");
        assert!(matches!(
            cfg.validate(),
            Err(SchemaError::DuplicateChoice { .. })
        ));
    }

    #[test]
    fn test_no_questions_rejected() {
        assert_eq!(config(vec![], "").validate(), Err(SchemaError::NoQuestions));
    }

    #[test]
    fn test_generation_bounds_checked() {
        let mut cfg = config(vec![Question::free_text("q1", "S", "Name")], "");
        cfg.max_tokens = 0;
        assert_eq!(cfg.validate(), Err(SchemaError::ZeroMaxTokens));

        cfg.max_tokens = 10;
        cfg.temperature = 2.5;
        assert!(matches!(
            cfg.validate(),
            Err(SchemaError::TemperatureOutOfRange(_))
        ));
    }

    #[test]
    fn test_accepts_only_declared_choices() {
        let q = Question::choice("q1", "S", "Pick", &["Seoul", "Busan"]);
        assert!(q.accepts("Seoul"));
        assert!(!q.accepts("seoul"));
        assert!(Question::free_text("q2", "S", "Name").accepts("anything"));
    }

    #[test]
    fn test_public_json_hides_generation_settings() {
        let cfg = config(vec![Question::free_text("q1", "S", "Name")], "secret {q1}");
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["variant"], "general");
        assert!(json.get("prompt_template").is_none());
        assert!(json.get("model").is_none());
        assert_eq!(json["questions"][0]["choices"], serde_json::Value::Null);
    }
}
