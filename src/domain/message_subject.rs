#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSubject {
    subject: String,
}

impl AsRef<str> for MessageSubject {
    fn as_ref(&self) -> &str {
        &self.subject
    }
}

impl TryFrom<String> for MessageSubject {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if (5..=200).contains(&trimmed.chars().count()) {
            Ok(Self {
                subject: trimmed.to_string(),
            })
        } else {
            Err("Subject must be between 5 and 200 characters".to_string())
        }
    }
}
