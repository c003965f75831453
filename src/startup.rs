use crate::configuration::{ContactSettings, Settings};
use crate::dispatcher::MailDispatcher;
use crate::email_client::EmailClient;
use crate::rate_limiter::{RateLimiter, enforce_rate_limit};
use crate::routes::{ApiResponse, health_check, not_found, service_metadata, submit_contact};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, from_fn};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, error, web, web::Data};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

const MAX_JSON_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.email_client.map(|settings| {
            EmailClient::new(
                settings.base_url,
                settings.sender_email,
                settings.authorization_token,
                settings.timeout,
            )
        });
        let dispatcher = MailDispatcher::new(email_client);
        if !dispatcher.is_enabled() {
            tracing::warn!(
                "No outbound mail channel is configured; contact emails will not be sent"
            );
        }
        let rate_limiter = RateLimiter::new(
            configuration.rate_limit.max_requests,
            configuration.rate_limit.window,
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            dispatcher,
            rate_limiter,
            configuration.contact,
            configuration.application.allowed_origins,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    dispatcher: MailDispatcher,
    rate_limiter: RateLimiter,
    contact: ContactSettings,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    let dispatcher = Data::new(dispatcher);
    let rate_limiter = Data::new(rate_limiter);
    let contact = Data::new(contact);
    let server = HttpServer::new(move || {
        let cors = allowed_origins.iter().fold(
            Cors::default()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
                .supports_credentials(),
            |cors, origin| cors.allowed_origin(origin),
        );
        App::new()
            // Registration is inside-out: the tracing logger runs first,
            // then security headers, then CORS (which answers preflights),
            // then the rate limiter, then the handlers.
            .wrap(from_fn(enforce_rate_limit))
            .wrap(cors)
            .wrap(security_headers())
            .wrap(TracingLogger::default())
            .app_data(
                web::JsonConfig::default()
                    .limit(MAX_JSON_PAYLOAD_BYTES)
                    .error_handler(json_error_handler),
            )
            .app_data(dispatcher.clone())
            .app_data(rate_limiter.clone())
            .app_data(contact.clone())
            .service(submit_contact)
            .service(service_metadata)
            .route("/api/health", web::get().to(health_check))
            .route("/health", web::get().to(health_check))
            .default_service(web::route().to(not_found))
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// Hardening headers applied uniformly to every response.
fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Referrer-Policy", "no-referrer"))
        .add(("X-Permitted-Cross-Domain-Policies", "none"))
}

/// Keep body-parsing rejections in the same JSON envelope as everything else.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        error::JsonPayloadError::Overflow { .. }
        | error::JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(ApiResponse::failure("Payload too large"))
        }
        _ => HttpResponse::BadRequest().json(ApiResponse::failure("Invalid request body")),
    };
    error::InternalError::from_response(err, response).into()
}
