/// Result alias that carries the custom [`ShowcaseError`] type.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Common error type for the core crate.
///
/// Navigation and gesture boundary conditions are deliberately not errors;
/// they degrade to no-ops. The variants here cover the genuinely failable
/// surfaces: catalog/config parsing and file IO in the driver.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// Free-form message for conditions without a dedicated variant.
    #[error("{0}")]
    Message(String),
    /// A caller handed the core structurally invalid data.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization errors.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl ShowcaseError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for ShowcaseError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for ShowcaseError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}
