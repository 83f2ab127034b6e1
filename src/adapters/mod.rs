//! Reference implementations of the outbound ports.

mod argon2;
mod email;
mod memory;

pub use argon2::{Argon2Encrypter, CryptoError};
pub use email::ValidatorEmailAdapter;
pub use memory::InMemoryAccountRepository;
