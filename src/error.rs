//! Error handler for signup.

use axum::http::StatusCode;
use thiserror::Error;

use crate::adapters::CryptoError;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors raised by capabilities and propagated by the use cases.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(ApplicationError::internal)
    }
}

/// Outcome of a rejected signup, as shown to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignUpError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),

    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),

    #[error("Internal server error")]
    Server,
}

impl SignUpError {
    /// HTTP status carried by the response envelope.
    pub fn status(&self) -> StatusCode {
        match self {
            SignUpError::MissingParam(_) | SignUpError::InvalidParam(_) => {
                StatusCode::BAD_REQUEST
            },
            SignUpError::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
