pub mod contact;
mod health_check;
mod home;
mod not_found;

pub use contact::{error_chain_fmt, submit_contact};
pub use health_check::health_check;
pub use home::service_metadata;
pub use not_found::not_found;

/// JSON envelope shared by every non-endpoint-specific response.
#[derive(Debug, serde::Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation_failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: "Validation failed".to_string(),
            errors: Some(errors),
        }
    }
}
