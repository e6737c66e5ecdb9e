use thiserror::Error;

/// Errors raised while building requests or reading configuration.
///
/// Failures reported by the backend are not represented here; those travel as
/// [`crate::envelope::Failure`] values.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Record has no id, updates need one")]
    MissingId,

    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}
