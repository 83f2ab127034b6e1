//! Interface for password hashing.

use async_trait::async_trait;

use crate::error::Result;

/// Port for one-way password transformation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Encrypter: Send + Sync {
    /// Hash `value` into its stored representation.
    async fn encrypt(&self, value: &str) -> Result<String>;
}
