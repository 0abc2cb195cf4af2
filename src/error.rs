use crate::db::dao::DaoLayerError;

/// Body text returned for every internal failure; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug)]
pub enum AppError {
    /// The payload is missing required fields or is not a JSON object.
    MalformedRequest(String),
    NotFound(String),
    /// A value is present but breaks a business rule.
    InvalidDomainValue(String),
    Internal(String),
}

impl AppError {
    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::MalformedRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_domain_value(message: impl Into<String>) -> Self {
        Self::InvalidDomainValue(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::MalformedRequest(message)
            | Self::NotFound(message)
            | Self::InvalidDomainValue(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    /// Message that is safe to send to the client.
    pub fn public_message(&self) -> &str {
        match self {
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE,
            _ => self.message(),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::Db(_) => AppError::internal(err.to_string()),
        }
    }
}
