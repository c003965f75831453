use unicode_segmentation::UnicodeSegmentation;

fn is_allowed_name_character(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '.'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterName {
    name: String,
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for SubmitterName {
    /// Every rule the value violates, in rule order.
    type Error = Vec<String>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let mut violations = Vec::new();

        let length = trimmed.graphemes(true).count();
        if !(2..=100).contains(&length) {
            violations.push("Name must be between 2 and 100 characters".to_string());
        }
        if !trimmed.chars().all(is_allowed_name_character) {
            violations
                .push("Name can only contain letters, spaces, hyphens, and dots".to_string());
        }

        if violations.is_empty() {
            Ok(Self {
                name: trimmed.to_string(),
            })
        } else {
            Err(violations)
        }
    }
}
