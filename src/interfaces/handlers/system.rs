use std::time::Duration;

use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use tokio::fs;

use crate::AppState;
use crate::constants::START_TIME;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    data_dir: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime =
        format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let data_dir_status = match fs::metadata(state.resume_repo.data_dir()).await {
        Ok(meta) if meta.is_dir() => "OK",
        _ => "Unavailable",
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_dir: data_dir_status.to_string(),
    })
}
