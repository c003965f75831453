use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, Validate)]
#[serde(try_from = "String")]
pub struct SubmitterEmail {
    #[validate(email)]
    email: String,
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl TryFrom<String> for SubmitterEmail {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        // Normalization: trim and lowercase before validating.
        let submitter_email = Self {
            email: value.trim().to_lowercase(),
        };
        match submitter_email.validate() {
            Ok(_) => Ok(submitter_email),
            Err(_) => Err("Please provide a valid email address".to_string()),
        }
    }
}
