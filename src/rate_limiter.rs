use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{HttpResponse, web};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::routes::ApiResponse;

pub const RATE_LIMIT_MESSAGE: &str =
    "Too many requests from this IP, please try again after 15 minutes.";

// Expired windows are swept once the map grows past this many clients.
const PRUNE_THRESHOLD: usize = 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    Limited,
}

struct Window {
    started_at: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client identifier.
///
/// The counter map is the only mutable state shared across requests; each
/// check is a single guarded update (increment plus comparison).
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request for `client` and decide whether it may proceed.
    pub fn check(&self, client: &str) -> RateLimitDecision {
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        if windows.len() >= PRUNE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started_at) < window);
        }

        let window = windows.entry(client.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }
        window.count += 1;

        if window.count > self.max_requests {
            RateLimitDecision::Limited
        } else {
            RateLimitDecision::Allowed
        }
    }
}

/// Ingress adapter: rejects over-limit clients with a fixed 429 payload
/// before the request reaches any handler.
pub async fn enforce_rate_limit<B>(
    limiter: web::Data<RateLimiter>,
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error>
where
    B: MessageBody + 'static,
{
    let client = {
        let info = req.connection_info();
        info.realip_remote_addr().unwrap_or("unknown").to_string()
    };

    match limiter.check(&client) {
        RateLimitDecision::Allowed => next
            .call(req)
            .await
            .map(ServiceResponse::map_into_left_body),
        RateLimitDecision::Limited => {
            tracing::warn!(client = %client, "Rate limit exceeded");
            let response =
                HttpResponse::TooManyRequests().json(ApiResponse::failure(RATE_LIMIT_MESSAGE));
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
