use anyhow::{Context, Result};

use crate::llm_client;
use crate::store::firestore;
use crate::survey::schema::SurveyVariant;

/// Application configuration loaded from environment variables.
/// Startup fails if either secret is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Overrides the variant's model tier when set.
    pub openai_model: Option<String>,
    /// Raw service-account JSON.
    pub firebase_key: String,
    pub firestore_project_id: Option<String>,
    pub firestore_base_url: String,
    pub survey_variant: SurveyVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            optional(key)
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let firebase_key = match optional("FIREBASE_KEY") {
            Some(raw) => raw,
            None => {
                let path = optional("FIREBASE_KEY_PATH").context(
                    "Required environment variable 'FIREBASE_KEY' (or 'FIREBASE_KEY_PATH') is not set",
                )?;
                std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read FIREBASE_KEY_PATH '{path}'"))?
            }
        };

        Ok(Config {
            openai_api_key: require("OPENAI_API_KEY")?,
            openai_base_url: optional("OPENAI_BASE_URL")
                .unwrap_or_else(|| llm_client::DEFAULT_BASE_URL.to_string()),
            openai_model: optional("OPENAI_MODEL"),
            firebase_key,
            firestore_project_id: optional("FIRESTORE_PROJECT_ID"),
            firestore_base_url: optional("FIRESTORE_BASE_URL")
                .unwrap_or_else(|| firestore::DEFAULT_BASE_URL.to_string()),
            survey_variant: optional("SURVEY_VARIANT")
                .map(|v| v.parse::<SurveyVariant>())
                .transpose()
                .context("SURVEY_VARIANT must be 'general' or 'indoro'")?
                .unwrap_or(SurveyVariant::Indoro),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_required_secrets() {
        let cfg = load(&[("OPENAI_API_KEY", "sk-1"), ("FIREBASE_KEY", "{}")]).unwrap();
        assert_eq!(cfg.openai_api_key, "sk-1");
        assert_eq!(cfg.firebase_key, "{}");
        assert_eq!(cfg.survey_variant, SurveyVariant::Indoro);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.openai_base_url, "https://api.openai.com/v1");
        assert!(cfg.openai_model.is_none());
        assert!(cfg.firestore_project_id.is_none());
        assert_eq!(cfg.firestore_base_url, "https://firestore.googleapis.com");
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = load(&[("FIREBASE_KEY", "{}")]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_missing_firebase_key_is_fatal() {
        let err = load(&[("OPENAI_API_KEY", "sk-1")]).unwrap_err();
        assert!(err.to_string().contains("FIREBASE_KEY"));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        assert!(load(&[("OPENAI_API_KEY", "  "), ("FIREBASE_KEY", "{}")]).is_err());
    }

    #[test]
    fn test_firebase_key_read_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"project_id\": \"indoro-fe1e2\"}}").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cfg = load(&[("OPENAI_API_KEY", "sk-1"), ("FIREBASE_KEY_PATH", path.as_str())]).unwrap();
        assert!(cfg.firebase_key.contains("indoro-fe1e2"));
    }

    #[test]
    fn test_unreadable_key_path_is_fatal() {
        let err = load(&[
            ("OPENAI_API_KEY", "sk-1"),
            ("FIREBASE_KEY_PATH", "/nonexistent/key.json"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("FIREBASE_KEY_PATH"));
    }

    #[test]
    fn test_variant_and_overrides() {
        let cfg = load(&[
            ("OPENAI_API_KEY", "sk-1"),
            ("FIREBASE_KEY", "{}"),
            ("SURVEY_VARIANT", "GENERAL"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("FIRESTORE_PROJECT_ID", "indoro-fe1e2"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(cfg.survey_variant, SurveyVariant::General);
        assert_eq!(cfg.openai_model.as_deref(), Some("gpt-4o"));
        assert_eq!(cfg.firestore_project_id.as_deref(), Some("indoro-fe1e2"));
        assert_eq!(cfg.port, 3000);
    }

    #[test]
    fn test_bad_variant_rejected() {
        assert!(load(&[
            ("OPENAI_API_KEY", "sk-1"),
            ("FIREBASE_KEY", "{}"),
            ("SURVEY_VARIANT", "pestle"),
        ])
        .is_err());
    }
}
