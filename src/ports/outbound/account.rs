//! Account repository port.

use async_trait::async_trait;

use crate::dto::{AccountModel, AddAccountModel};
use crate::error::Result;

/// Port for account persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Store a new account and return it with its assigned `id`.
    ///
    /// `account.password` is already hashed.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel>;
}
