use crate::domain::SubmitterEmail;
use crate::templates::RenderedMessage;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    sender: SubmitterEmail,
    authorization_token: SecretString,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: SubmitterEmail,
        authorization_token: SecretString,
        timeout_duration: std::time::Duration,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()
            .unwrap();

        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }

    pub async fn send_email(&self, message: &RenderedMessage) -> Result<(), reqwest::Error> {
        let url = format!("{}/api/send", self.base_url);
        let request_body = SendEmailRequest {
            from: EmailInfo {
                email: self.sender.as_ref(),
                name: "",
            },
            to: vec![EmailInfo {
                email: message.recipient.as_ref(),
                name: "",
            }],
            reply_to: message.reply_to.as_ref().map(|address| EmailInfo {
                email: address.as_ref(),
                name: "",
            }),
            subject: message.subject.as_str().into(),
            html: message.html_body.as_str().into(),
        };
        self.http_client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.authorization_token.expose_secret()),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmailInfo<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SendEmailRequest<'a> {
    pub from: EmailInfo<'a>,
    pub to: Vec<EmailInfo<'a>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailInfo<'a>>,
    #[serde(borrow)]
    pub subject: Cow<'a, str>,
    #[serde(borrow)]
    pub html: Cow<'a, str>,
}
