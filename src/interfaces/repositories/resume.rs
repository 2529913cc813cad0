use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::entities::language::Language;
use crate::errors::AppError;

/// Storage seam for per-language resume documents. Documents travel
/// as raw JSON values: the server stores whatever well-formed object
/// it is given and never enforces the resume shape, which is a
/// client-side concern.
#[async_trait]
pub trait ResumeRepository {
    async fn load(&self, lang: Language) -> Result<JsonValue, AppError>;
    async fn store(&self, lang: Language, document: &JsonValue) -> Result<(), AppError>;
}
