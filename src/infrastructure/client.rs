use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::entities::{language::Language, resume::ResumeDocument};
use crate::domain::use_cases::store::DocumentStore;
use crate::errors::ClientError;

/// Acknowledgment returned by the server after a successful save.
#[derive(Debug, Deserialize)]
pub struct SaveAck {
    pub success: bool,
}

/// Loads resume documents from the persistence server at startup and
/// writes the active one back on demand. Carries no state beyond the
/// HTTP client; the documents live in the [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct PersistenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl PersistenceClient {
    /// `timeout` bounds every request; a hung server fails the call
    /// instead of leaving it pending forever.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(PersistenceClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn resume_url(&self, lang: Language) -> String {
        format!("{}/api/resume/{}", self.base_url, lang)
    }

    /// Loads both languages in parallel and installs them in the
    /// store. All-or-nothing: if either fetch fails for any reason,
    /// both slots get fresh default documents so the two languages
    /// stay structurally consistent. Never fails the caller.
    pub async fn initialize(&self, store: &mut DocumentStore) {
        match self.fetch_all().await {
            Ok((en, pt)) => {
                debug!("loaded resume documents from server");
                store.install(Language::En, en);
                store.install(Language::Pt, pt);
            }
            Err(e) => {
                warn!("resume load failed, falling back to defaults: {e}");
                store.install(Language::En, ResumeDocument::default());
                store.install(Language::Pt, ResumeDocument::default());
            }
        }
    }

    async fn fetch_all(&self) -> Result<(ResumeDocument, ResumeDocument), ClientError> {
        futures::try_join!(self.fetch(Language::En), self.fetch(Language::Pt))
    }

    async fn fetch(&self, lang: Language) -> Result<ResumeDocument, ClientError> {
        let response = self.http.get(self.resume_url(lang)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status {
                lang,
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Serializes the active-language document and POSTs it to the
    /// server, pretty-printed the way the on-disk files are. Failures
    /// propagate; the in-memory document is untouched either way.
    pub async fn save(&self, store: &DocumentStore) -> Result<SaveAck, ClientError> {
        let lang = store.active_language();
        let document = store
            .document()
            .ok_or(ClientError::NothingToSave(lang))?;
        let body = serde_json::to_string_pretty(document)?;

        let response = self
            .http
            .post(self.resume_url(lang))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                lang,
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}
