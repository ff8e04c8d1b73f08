//! Cloud Firestore backend over the REST API, authenticated with a
//! service-account key (OAuth2 JWT-bearer grant).

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::store::{DocumentStore, StoreError};
use crate::survey::collector::ResponseSet;

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// The fields of a Google service-account key file that this backend needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let key: ServiceAccountKey =
            serde_json::from_str(raw).map_err(|e| StoreError::Credentials(e.to_string()))?;
        // Fail at startup rather than on the first submission.
        EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| StoreError::Credentials(format!("private_key: {e}")))?;
        Ok(key)
    }
}

#[derive(Debug, Serialize)]
struct TokenClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub struct FirestoreStore {
    client: Client,
    key: ServiceAccountKey,
    project_id: String,
    base_url: String,
}

impl FirestoreStore {
    pub fn new(client: Client, key: ServiceAccountKey, project_id: Option<String>) -> Self {
        let project_id = project_id.unwrap_or_else(|| key.project_id.clone());
        Self {
            client,
            key,
            project_id,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn document_url(&self, collection: &str, document_id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, collection, document_id
        )
    }

    fn signed_assertion(&self) -> Result<String, StoreError> {
        let iat = Utc::now().timestamp();
        let claims = TokenClaims {
            iss: &self.key.client_email,
            scope: DATASTORE_SCOPE,
            aud: &self.key.token_uri,
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();
        let signing_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        Ok(encode(&header, &claims, &signing_key)?)
    }

    async fn access_token(&self) -> Result<String, StoreError> {
        let assertion = self.signed_assertion()?;
        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::TokenExchange {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }
}

/// Encodes a response set as a Firestore document body.
pub fn document_body(data: &ResponseSet) -> Value {
    let fields: Map<String, Value> = data
        .iter()
        .map(|(k, v)| (k.to_string(), json!({ "stringValue": v })))
        .collect();
    json!({ "fields": fields })
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn set_document(
        &self,
        collection: &str,
        document_id: &str,
        data: &ResponseSet,
    ) -> Result<(), StoreError> {
        let token = self.access_token().await?;
        let url = self.document_url(collection, document_id);
        debug!("Writing Firestore document {collection}/{document_id}");

        // PATCH without an update mask replaces the whole document.
        let response = self
            .client
            .patch(&url)
            .bearer_auth(token)
            .json(&document_body(data))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Write {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
