//! Argon2id password hasher implementation.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand::rngs::OsRng;

use crate::config::Argon2 as ArgonConfig;
use crate::error::Result;
use crate::ports::outbound::Encrypter;

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("argon2 error: {0}")]
    Argon2(String),
}

/// Argon2id password hasher producing PHC strings.
#[derive(Clone)]
pub struct Argon2Encrypter {
    params: Params,
}

impl Argon2Encrypter {
    /// Create a new [`Argon2Encrypter`].
    pub fn new(
        config: Option<ArgonConfig>,
    ) -> std::result::Result<Self, CryptoError> {
        let config = config.unwrap_or_default();

        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(Self { params })
    }

    fn hash_password(
        params: Params,
        password: &str,
    ) -> std::result::Result<String, CryptoError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(hash.to_string())
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, value: &str) -> Result<String> {
        let params = self.params.clone();
        let password = value.to_owned();

        // Hashing is CPU-bound, keep it off the async workers.
        let hash = tokio::task::spawn_blocking(move || {
            Self::hash_password(params, &password)
        })
        .await??;

        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::PasswordVerifier;
    use argon2::password_hash::PasswordHash;

    fn encrypter() -> Argon2Encrypter {
        Argon2Encrypter::new(Some(ArgonConfig {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_hash_is_phc_argon2id() {
        let hash = encrypter().encrypt("my_password").await.unwrap();

        assert!(hash.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
        assert!(!hash.contains("my_password"));
    }

    #[tokio::test]
    async fn test_hash_verifies() {
        let hash = encrypter().encrypt("my_password").await.unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(
            Argon2::default()
                .verify_password(b"my_password", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"other_password", &parsed)
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_salt_is_random() {
        let encrypter = encrypter();
        let first = encrypter.encrypt("my_password").await.unwrap();
        let second = encrypter.encrypt("my_password").await.unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_params() {
        let res = Argon2Encrypter::new(Some(ArgonConfig {
            memory_cost: 0,
            iterations: 0,
            parallelism: 0,
            hash_length: 32,
        }));

        assert!(matches!(res, Err(CryptoError::Argon2(_))));
    }
}
