mod contact_submission;
mod message_body;
mod message_subject;
mod submitter_email;
mod submitter_name;

pub use contact_submission::ContactSubmission;
pub use message_body::MessageBody;
pub use message_subject::MessageSubject;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
