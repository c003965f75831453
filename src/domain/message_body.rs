#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody {
    message: String,
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.message
    }
}

impl TryFrom<String> for MessageBody {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if (10..=5000).contains(&trimmed.chars().count()) {
            Ok(Self {
                message: trimmed.to_string(),
            })
        } else {
            Err("Message must be between 10 and 5000 characters".to_string())
        }
    }
}
