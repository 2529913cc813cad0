use actix_web::{HttpResponse, get, post, web};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::AppState;
use crate::domain::entities::language::Language;
use crate::errors::AppError;
use crate::interfaces::repositories::resume::ResumeRepository;

/// Returns the stored resume for a language, verbatim. The language
/// segment is parsed into the closed [`Language`] enum, so it can
/// never reach the file system as an arbitrary path component.
#[get("/resume/{lang}")]
pub async fn get_resume(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let lang: Language = path.into_inner().parse()?;
    info!("Loading resume: {}", lang.file_name());

    let document = state.resume_repo.load(lang).await?;
    Ok(HttpResponse::Ok().json(document))
}

/// Overwrites the stored resume for a language. Any well-formed JSON
/// object is accepted; shape enforcement happens client-side.
#[post("/resume/{lang}")]
pub async fn save_resume(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<JsonValue>,
) -> Result<HttpResponse, AppError> {
    let lang: Language = path.into_inner().parse()?;
    info!("Saving resume: {}", lang.file_name());

    let document = body.into_inner();
    if !document.is_object() {
        return Err(AppError::SaveFailed("Invalid resume data format".into()));
    }

    state.resume_repo.store(lang, &document).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
