use crate::helpers::{spawn_app, spawn_app_with};
use serde_json::json;

#[tokio::test]
async fn the_sixth_request_in_a_window_is_rejected() {
    let app = spawn_app_with(|c| c.rate_limit.max_requests = 5).await;

    // Payload validity is irrelevant to the limiter.
    let body = json!({});
    for _ in 0..5 {
        let response = app.post_contact(&body).await;
        assert_eq!(400, response.status().as_u16());
    }

    let response = app.post_contact(&body).await;

    assert_eq!(429, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!("Too many requests from this IP, please try again after 15 minutes.")
    );
}

#[tokio::test]
async fn security_headers_are_applied_uniformly() {
    let app = spawn_app().await;

    for path in ["/api/health", "/does-not-exist"] {
        let response = app.get(path).await;
        let headers = response.headers();

        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "SAMEORIGIN");
        assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
    }
}

#[tokio::test]
async fn a_preflight_from_an_allowed_origin_is_accepted() {
    let app = spawn_app().await;

    // http://localhost:3000 is on the configured allow-list.
    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/contact", app.address),
        )
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("No CORS allow-origin header"),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn a_preflight_from_a_disallowed_origin_is_rejected() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/contact", app.address),
        )
        .header("Origin", "https://not-on-the-list.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
    assert_eq!(400, response.status().as_u16());
}
