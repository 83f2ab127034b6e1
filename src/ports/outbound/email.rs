//! Interface for email address validation.

use crate::error::Result;

#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a well-formed address.
    fn is_valid(&self, email: &str) -> Result<bool>;
}
