use actix_web::{HttpResponse, Responder, get};

#[derive(serde::Serialize)]
struct ServiceMetadata {
    message: &'static str,
    version: &'static str,
    status: &'static str,
}

#[get("/")]
pub async fn service_metadata() -> impl Responder {
    HttpResponse::Ok().json(ServiceMetadata {
        message: "Contact Form Backend API",
        version: env!("CARGO_PKG_VERSION"),
        status: "Running",
    })
}
