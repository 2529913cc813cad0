use actix_web::{HttpResponse, Responder, get};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Bilingual resume editor API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "languages": ["en", "pt"],
        "endpoints": ["/api/resume/{lang}", "/health"]
    }))
}
