use crate::routes::ApiResponse;
use actix_web::{HttpResponse, Responder};

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ApiResponse::failure("Endpoint not found"))
}
