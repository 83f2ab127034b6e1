//! Data Transfer Objects shared by the use cases and the repositories.

use serde::{Deserialize, Serialize};

/// Account data handed to [`AddAccount`](crate::ports::inbound::AddAccount).
///
/// `password` is plaintext when built by the controller and holds the hash
/// once it reaches the repository.
#[derive(Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AddAccountModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddAccountModel")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Account as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Hashed password.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let account = AddAccountModel {
            name: "John Doe".into(),
            email: "john_doe@mail.com".into(),
            password: "my_password".into(),
        };

        let debug = format!("{account:?}");
        assert!(debug.contains("john_doe@mail.com"));
        assert!(!debug.contains("my_password"));
    }
}
