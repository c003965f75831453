use crate::configuration::ContactSettings;
use crate::dispatcher::{DispatchRefused, MailDispatcher};
use crate::domain::ContactSubmission;
use crate::routes::ApiResponse;
use crate::templates::render_contact_emails;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, post, web};
use chrono::Utc;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! Check your email for confirmation.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Raw request body. Fields stay optional so missing ones reach the
/// validator and show up in its error list instead of failing deserialization.
#[derive(serde::Deserialize, Debug)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    Configuration(#[from] DispatchRefused),
    #[error("{failed} of {attempted} notification emails failed to send")]
    Delivery { failed: usize, attempted: usize },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::Configuration(_)
            | ContactError::Delivery { .. }
            | ContactError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Validation details come from the caller's own input and are safe to
    /// return; every other failure collapses to one generic message.
    fn error_response(&self) -> HttpResponse {
        match self {
            ContactError::Validation(errors) => {
                HttpResponse::BadRequest().json(ApiResponse::validation_failure(errors.clone()))
            }
            _ => HttpResponse::InternalServerError()
                .json(ApiResponse::failure(GENERIC_FAILURE_MESSAGE)),
        }
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, dispatcher, contact),
    fields(submitter_email = tracing::field::Empty, subject = tracing::field::Empty)
)]
#[post("/api/contact")]
pub async fn submit_contact(
    form: web::Json<ContactForm>,
    dispatcher: web::Data<MailDispatcher>,
    contact: web::Data<ContactSettings>,
) -> Result<HttpResponse, ContactError> {
    let submission =
        ContactSubmission::try_from(form.into_inner()).map_err(ContactError::Validation)?;
    tracing::Span::current()
        .record(
            "submitter_email",
            tracing::field::display(&submission.email),
        )
        .record("subject", tracing::field::display(submission.subject.as_ref()));

    let (admin_message, user_message) = render_contact_emails(&submission, &contact, Utc::now());

    let outcomes = dispatcher.dispatch(&[admin_message, user_message]).await?;
    let failed = outcomes.iter().filter(|outcome| !outcome.is_sent()).count();
    if failed > 0 {
        tracing::error!(
            "{} of {} notification emails failed to send",
            failed,
            outcomes.len()
        );
        return Err(ContactError::Delivery {
            failed,
            attempted: outcomes.len(),
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(SUCCESS_MESSAGE)))
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
