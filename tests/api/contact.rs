use crate::helpers::{spawn_app, spawn_app_with};
use contact_backend::email_client::SendEmailRequest;
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "subject": "Hello there",
        "message": "This is a test message."
    })
}

/// Matches provider requests whose first recipient is the given address.
struct RecipientMatcher(String);

impl wiremock::Match for RecipientMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<SendEmailRequest>(&request.body)
            .map(|body| body.to.first().is_some_and(|to| to.email == self.0))
            .unwrap_or(false)
    }
}

#[tokio::test]
async fn a_valid_submission_returns_200_and_sends_both_emails() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/api/send"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));

    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 2);

    let admin = emails
        .iter()
        .find(|email| email.recipient == app.admin_email)
        .expect("No admin notification was sent");
    assert!(admin.subject.contains("Hello there"));
    assert!(admin.html.contains("Jane Doe"));

    let user = emails
        .iter()
        .find(|email| email.recipient == "jane@example.com")
        .expect("No acknowledgment was sent");
    assert_eq!(user.reply_to.as_deref(), Some(app.admin_email.as_str()));
}

#[tokio::test]
async fn missing_fields_are_each_reported_once_in_field_order() {
    let app = spawn_app().await;

    let response = app.post_contact(&json!({})).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Validation failed"));
    assert_eq!(
        body["errors"],
        json!([
            "Name is required",
            "Email is required",
            "Subject is required",
            "Message is required",
        ])
    );
}

#[tokio::test]
async fn short_fields_are_rejected_with_one_message_per_violation() {
    let app = spawn_app().await;

    let response = app
        .post_contact(&json!({
            "name": "J",
            "email": "jane@example.com",
            "subject": "Hi",
            "message": "short"
        }))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["errors"],
        json!([
            "Name must be between 2 and 100 characters",
            "Subject must be between 5 and 200 characters",
            "Message must be between 10 and 5000 characters",
        ])
    );
}

#[tokio::test]
async fn invalid_fields_are_rejected_with_a_400() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (
            json!({
                "name": "Jane <Doe>",
                "email": "jane@example.com",
                "subject": "Hello there",
                "message": "This is a test message."
            }),
            "a name with forbidden characters",
        ),
        (
            json!({
                "name": "Jane Doe",
                "email": "definitely-not-an-email",
                "subject": "Hello there",
                "message": "This is a test message."
            }),
            "an invalid email",
        ),
        (
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "a".repeat(201),
                "message": "This is a test message."
            }),
            "an overlong subject",
        ),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_contact(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request for {}",
            description
        );
    }
}

#[tokio::test]
async fn no_email_is_dispatched_for_an_invalid_submission() {
    let app = spawn_app().await;

    let response = app
        .post_contact(&json!({
            "name": "J",
            "email": "jane@example.com",
            "subject": "Hi",
            "message": "short"
        }))
        .await;

    assert_eq!(400, response.status().as_u16());
    assert!(app.sent_emails().await.is_empty());
}

#[tokio::test]
async fn a_provider_failure_returns_500_with_a_generic_body() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!("Failed to send message. Please try again later.")
    );
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn a_single_failed_send_fails_the_request_but_both_are_attempted() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(RecipientMatcher(app.admin_email.clone()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let response = app.post_contact(&valid_body()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    assert_eq!(app.sent_emails().await.len(), 2);
}

#[tokio::test]
async fn a_missing_mail_configuration_returns_500_without_detail() {
    let app = spawn_app_with(|c| c.email_client = None).await;

    let response = app.post_contact(&valid_body()).await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        json!("Failed to send message. Please try again later.")
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_with_the_standard_envelope() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid request body"));
}
