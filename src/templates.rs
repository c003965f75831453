//! Rendering of the two notification emails produced for every submission.
//!
//! Rendering is pure: the output depends only on the submission, the contact
//! settings and the render timestamp passed in by the caller.

use crate::configuration::ContactSettings;
use crate::domain::{ContactSubmission, SubmitterEmail};
use chrono::{DateTime, Utc};

/// A fully formed email, ready to hand to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub recipient: SubmitterEmail,
    pub subject: String,
    pub html_body: String,
    pub reply_to: Option<SubmitterEmail>,
}

pub fn render_contact_emails(
    submission: &ContactSubmission,
    settings: &ContactSettings,
    rendered_at: DateTime<Utc>,
) -> (RenderedMessage, RenderedMessage) {
    (
        render_admin_notification(submission, settings, rendered_at),
        render_submitter_acknowledgment(submission, settings, rendered_at),
    )
}

/// Notification to the configured administrator address.
fn render_admin_notification(
    submission: &ContactSubmission,
    settings: &ContactSettings,
    rendered_at: DateTime<Utc>,
) -> RenderedMessage {
    let name = escape_html(submission.name.as_ref());
    let email = escape_html(submission.email.as_ref());
    let subject = escape_html(submission.subject.as_ref());
    let message = escape_html(submission.message.as_ref());
    let sent_on = rendered_at.format("%Y-%m-%d %H:%M:%S UTC");

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
  <h2 style="color: #333; margin-bottom: 20px;">New Contact Form Submission</h2>
  <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin-bottom: 20px;">
    <p style="margin: 0; color: #666; font-size: 14px;">You've received a new message from your portfolio website.</p>
  </div>
  <div style="margin-bottom: 15px;">
    <strong style="color: #333;">Name:</strong> {name}
  </div>
  <div style="margin-bottom: 15px;">
    <strong style="color: #333;">Email:</strong> <a href="mailto:{email}" style="color: #007bff;">{email}</a>
  </div>
  <div style="margin-bottom: 15px;">
    <strong style="color: #333;">Subject:</strong> {subject}
  </div>
  <div style="margin-bottom: 20px;">
    <strong style="color: #333;">Message:</strong>
    <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin-top: 10px; white-space: pre-wrap;">{message}</div>
  </div>
  <div style="border-top: 1px solid #e0e0e0; padding-top: 15px; font-size: 12px; color: #666;">
    <p style="margin: 0;">This message was sent from your portfolio contact form.</p>
    <p style="margin: 0;">Sent on: {sent_on}</p>
  </div>
</div>"#
    );

    RenderedMessage {
        recipient: settings.admin_email.clone(),
        subject: format!(
            "New Contact Form Submission: {}",
            submission.subject.as_ref()
        ),
        html_body,
        reply_to: None,
    }
}

/// Acknowledgment sent back to the submitter, with the administrator address
/// as reply-to. The reference id is derived from the render timestamp; it is
/// monotonically increasing per process and purely cosmetic.
fn render_submitter_acknowledgment(
    submission: &ContactSubmission,
    settings: &ContactSettings,
    rendered_at: DateTime<Utc>,
) -> RenderedMessage {
    let name = escape_html(submission.name.as_ref());
    let email = escape_html(submission.email.as_ref());
    let subject = escape_html(submission.subject.as_ref());
    let message = escape_html(submission.message.as_ref());
    let response_window = escape_html(&settings.response_window);
    let reference_id = rendered_at.timestamp_millis();
    let sent_on = rendered_at.format("%Y-%m-%d %H:%M:%S UTC");
    let portfolio_url = &settings.portfolio_url;
    let linkedin_url = &settings.linkedin_url;
    let github_url = &settings.github_url;

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 8px;">
  <div style="text-align: center; margin-bottom: 30px;">
    <h1 style="color: #333; margin-bottom: 10px;">Thank You for Contacting Me!</h1>
    <p style="color: #666; font-size: 16px;">I've received your message and will get back to you soon.</p>
  </div>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px;">
    <h3 style="color: #333; margin-bottom: 15px;">Your Message Details:</h3>
    <div style="margin-bottom: 10px;">
      <strong style="color: #333;">Name:</strong> {name}
    </div>
    <div style="margin-bottom: 10px;">
      <strong style="color: #333;">Email:</strong> {email}
    </div>
    <div style="margin-bottom: 15px;">
      <strong style="color: #333;">Subject:</strong> {subject}
    </div>
    <div>
      <strong style="color: #333;">Message:</strong>
      <div style="background-color: white; padding: 15px; border-radius: 5px; margin-top: 10px; white-space: pre-wrap;">{message}</div>
    </div>
  </div>
  <div style="text-align: center; margin-bottom: 20px;">
    <p style="color: #666; margin-bottom: 10px;">You can expect a response within {response_window}.</p>
    <div style="background-color: #007bff; color: white; padding: 10px 20px; border-radius: 5px; display: inline-block;">
      Reference ID: {reference_id}
    </div>
  </div>
  <div style="border-top: 1px solid #e0e0e0; padding-top: 20px; text-align: center;">
    <h4 style="color: #333; margin-bottom: 10px;">Connect with me:</h4>
    <div>
      <a href="{portfolio_url}" style="color: #007bff; text-decoration: none; margin: 0 10px;">Portfolio</a>
      <a href="{linkedin_url}" style="color: #007bff; text-decoration: none; margin: 0 10px;">LinkedIn</a>
      <a href="{github_url}" style="color: #007bff; text-decoration: none; margin: 0 10px;">GitHub</a>
    </div>
    <p style="color: #666; font-size: 12px; margin-top: 15px;">Sent on: {sent_on}</p>
  </div>
</div>"#
    );

    RenderedMessage {
        recipient: submission.email.clone(),
        subject: format!(
            "Thank you for contacting me - {}",
            submission.subject.as_ref()
        ),
        html_body,
        reply_to: Some(settings.admin_email.clone()),
    }
}

/// Escape user-supplied text before interpolating it into an HTML document.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
