//! Signup is the account registration core: validate a signup request, hash
//! the password, persist the account and answer with a response envelope.

#![forbid(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod controller;
pub mod dto;
pub mod error;
pub mod http;
pub mod ports;
pub mod telemetry;
pub mod usecases;

use adapters::{
    Argon2Encrypter, InMemoryAccountRepository, ValidatorEmailAdapter,
};
use config::Configuration;
use controller::SignUpController;
use usecases::DbAddAccount;

/// Build a [`SignUpController`] wired with the bundled adapters.
pub fn signup_controller(
    config: &Configuration,
) -> error::Result<SignUpController> {
    let encrypter = Argon2Encrypter::new(config.argon2.clone())?;
    let add_account = DbAddAccount::new(
        Box::new(encrypter),
        Box::new(InMemoryAccountRepository::new()),
    );

    Ok(SignUpController::new(
        Box::new(ValidatorEmailAdapter),
        Box::new(add_account),
    ))
}
