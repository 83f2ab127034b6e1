//! Account creation use case port.

use async_trait::async_trait;

use crate::dto::{AccountModel, AddAccountModel};
use crate::error::Result;

/// Inbound port for account creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account from a plaintext password.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel>;
}
