use thiserror::Error;

pub const UNKNOWN_COLUMN_CODE: &str = "unknown_column";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("{message}")]
    UnknownColumn { message: String },
}

impl ProjectionError {
    pub(crate) fn unknown_column(message: impl Into<String>) -> Self {
        Self::UnknownColumn {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownColumn { .. } => UNKNOWN_COLUMN_CODE,
        }
    }

    /// Every projection failure is caused by the request, never the server.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::UnknownColumn { .. } => true,
        }
    }
}
