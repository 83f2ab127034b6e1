//! Account creation use case implementation.

use async_trait::async_trait;

use crate::dto::{AccountModel, AddAccountModel};
use crate::error::Result;
use crate::ports::inbound::AddAccount;
use crate::ports::outbound::{AddAccountRepository, Encrypter};

/// Hashes the password, then stores the account.
pub struct DbAddAccount {
    encrypter: Box<dyn Encrypter>,
    account_repo: Box<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(
        encrypter: Box<dyn Encrypter>,
        account_repo: Box<dyn AddAccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            account_repo,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[tracing::instrument(skip_all, fields(email = %account.email))]
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        let password = self.encrypter.encrypt(&account.password).await?;

        self.account_repo
            .add(AddAccountModel { password, ..account })
            .await
    }
}
