use actix_web::{
    HttpResponse,
    error::ResponseError,
    http::{StatusCode, header::ContentType},
};
use derive_more::Display;

use crate::domain::entities::language::Language;

/// Errors surfaced over HTTP by the persistence server. Every variant
/// renders as a stable `{error, message}` JSON body.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Unsupported language code: {_0}")]
    InvalidLanguage(String),

    #[display("Could not load {_0} resume data")]
    ResumeNotFound(Language),

    #[display("{_0}")]
    SaveFailed(String),
}

impl AppError {
    fn label(&self) -> &'static str {
        match self {
            AppError::InvalidLanguage(_) => "Invalid language",
            AppError::ResumeNotFound(_) => "Resume not found",
            AppError::SaveFailed(_) => "Failed to save resume",
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({
                "error": self.label(),
                "message": self.to_string(),
            }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
            AppError::ResumeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SaveFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures local to the in-memory document store. These never cross
/// the HTTP boundary; callers log them and carry on.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display("no resume document loaded for active language {_0}")]
    NoActiveDocument(Language),

    #[display("no resume document loaded for {_0}")]
    NoDocument(Language),

    #[display("malformed resume document: {_0}")]
    MalformedDocument(serde_json::Error),
}

/// Failures of a single section mutation. A failed mutation leaves the
/// store exactly as it was.
#[derive(Debug, Display)]
pub enum MutationError {
    #[display("skill name cannot be empty")]
    EmptyName,

    #[display("skill index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[display("no resume document loaded for {_0}")]
    NoDocument(Language),

    #[display("{_0}")]
    Store(StoreError),
}

impl From<StoreError> for MutationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NoActiveDocument(lang) | StoreError::NoDocument(lang) => {
                MutationError::NoDocument(lang)
            }
            other => MutationError::Store(other),
        }
    }
}

/// Failures of the persistence client talking to the server. Save
/// failures propagate to the interactive caller; load failures are
/// absorbed by the default-document fallback.
#[derive(Debug, Display)]
pub enum ClientError {
    #[display("request failed: {_0}")]
    Http(reqwest::Error),

    #[display("server responded with status {status} for {lang}")]
    Status { lang: Language, status: u16 },

    #[display("could not serialize resume document: {_0}")]
    Serialize(serde_json::Error),

    #[display("no resume document loaded for {_0}")]
    NothingToSave(Language),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialize(err)
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for StoreError {}
impl std::error::Error for MutationError {}
impl std::error::Error for ClientError {}
