use crate::email_client::EmailClient;
use crate::templates::RenderedMessage;
use futures::future::join_all;

/// Hands rendered messages to the outbound mail channel.
///
/// Built without a client when the mail configuration is absent at startup;
/// every dispatch is then refused with a configuration error instead of a
/// delivery failure.
pub struct MailDispatcher {
    client: Option<EmailClient>,
}

#[derive(Debug)]
pub enum DispatchOutcome {
    Sent,
    Failed(reqwest::Error),
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, DispatchOutcome::Sent)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("The outbound mail channel is not configured")]
pub struct DispatchRefused;

impl MailDispatcher {
    pub fn new(client: Option<EmailClient>) -> Self {
        Self { client }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Attempt every message concurrently. A failed send never prevents the
    /// attempt on the others; each failure is logged with its cause chain.
    #[tracing::instrument(name = "Dispatching contact emails", skip(self, messages))]
    pub async fn dispatch(
        &self,
        messages: &[RenderedMessage],
    ) -> Result<Vec<DispatchOutcome>, DispatchRefused> {
        let client = self.client.as_ref().ok_or(DispatchRefused)?;

        let results = join_all(messages.iter().map(|message| client.send_email(message))).await;

        Ok(results
            .into_iter()
            .zip(messages)
            .map(|(result, message)| match result {
                Ok(()) => DispatchOutcome::Sent,
                Err(e) => {
                    tracing::error!(
                        error.cause_chain = ?e,
                        recipient = %message.recipient,
                        "Failed to send a contact email",
                    );
                    DispatchOutcome::Failed(e)
                }
            })
            .collect())
    }
}
