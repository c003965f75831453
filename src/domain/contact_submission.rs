use crate::domain::{MessageBody, MessageSubject, SubmitterEmail, SubmitterName};
use crate::routes::contact::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub subject: MessageSubject,
    pub message: MessageBody,
}

impl TryFrom<ContactForm> for ContactSubmission {
    /// Every violation across all fields, in field order
    /// (name, email, subject, message).
    type Error = Vec<String>;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let name = match form.name {
            Some(raw) => match SubmitterName::try_from(raw) {
                Ok(name) => Some(name),
                Err(mut errors) => {
                    violations.append(&mut errors);
                    None
                }
            },
            None => {
                violations.push("Name is required".to_string());
                None
            }
        };

        let email = match form.email {
            Some(raw) => match SubmitterEmail::try_from(raw) {
                Ok(email) => Some(email),
                Err(error) => {
                    violations.push(error);
                    None
                }
            },
            None => {
                violations.push("Email is required".to_string());
                None
            }
        };

        let subject = match form.subject {
            Some(raw) => match MessageSubject::try_from(raw) {
                Ok(subject) => Some(subject),
                Err(error) => {
                    violations.push(error);
                    None
                }
            },
            None => {
                violations.push("Subject is required".to_string());
                None
            }
        };

        let message = match form.message {
            Some(raw) => match MessageBody::try_from(raw) {
                Ok(message) => Some(message),
                Err(error) => {
                    violations.push(error);
                    None
                }
            },
            None => {
                violations.push("Message is required".to_string());
                None
            }
        };

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(violations),
        }
    }
}
