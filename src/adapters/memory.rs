//! In-memory account repository.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use tokio::sync::RwLock;

use crate::dto::{AccountModel, AddAccountModel};
use crate::error::Result;
use crate::ports::outbound::AddAccountRepository;

/// Bytes of randomness behind an account id.
const ID_LENGTH: usize = 16;

/// Accounts kept in process memory, keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, AccountModel>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty [`InMemoryAccountRepository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a stored account by id.
    pub async fn get(&self, id: &str) -> Option<AccountModel> {
        self.accounts.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    fn generate_id() -> String {
        let mut bytes = [0u8; ID_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        let mut accounts = self.accounts.write().await;

        let mut id = Self::generate_id();
        while accounts.contains_key(&id) {
            id = Self::generate_id();
        }

        let record = AccountModel {
            id: id.clone(),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.insert(id, record.clone());

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_data(email: &str) -> AddAccountModel {
        AddAccountModel {
            name: "valid_name".into(),
            email: email.into(),
            password: "hashed_value".into(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id() {
        let repo = InMemoryAccountRepository::new();
        assert!(repo.is_empty().await);

        let account = repo.add(account_data("valid@mail.com")).await.unwrap();

        assert_eq!(account.id.len(), ID_LENGTH * 2);
        assert!(account.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.email, "valid@mail.com");
        assert_eq!(account.password, "hashed_value");
        assert_eq!(repo.get(&account.id).await, Some(account));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = InMemoryAccountRepository::new();

        let first = repo.add(account_data("first@mail.com")).await.unwrap();
        let second = repo.add(account_data("second@mail.com")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let repo = InMemoryAccountRepository::new();
        assert_eq!(repo.get("unknown").await, None);
    }
}
