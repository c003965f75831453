use actix_web::{HttpResponse, Responder};
use chrono::Utc;

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    environment: String,
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
        environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
    })
}
