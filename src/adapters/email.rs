//! Email validation backed by the `validator` crate.

use validator::ValidateEmail;

use crate::error::Result;
use crate::ports::outbound::EmailValidator;

/// [`EmailValidator`] following the HTML5 email rules of `validator`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatorEmailAdapter;

impl EmailValidator for ValidatorEmailAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.validate_email())
    }
}
