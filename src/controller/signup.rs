use async_trait::async_trait;
use serde::Deserialize;

use crate::dto::{AccountModel, AddAccountModel};
use crate::error::{ApplicationError, SignUpError};
use crate::http::{HttpRequest, HttpResponse, ok};
use crate::ports::inbound::{AddAccount, Controller};
use crate::ports::outbound::EmailValidator;
use crate::telemetry::SIGNUP_RESPONSES;

/// Signup form, every field optional until validated.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field(
                "password_confirmation",
                &self.password_confirmation.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Empty strings count as missing.
fn required(
    field: &'static str,
    value: Option<String>,
) -> Result<String, SignUpError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(SignUpError::MissingParam(field))
}

/// Record the cause of a fault and hide it behind a generic error.
fn fault(err: ApplicationError) -> SignUpError {
    tracing::error!(error = %err, "signup failed, returning 500 status");
    SignUpError::Server
}

/// Validates signup requests and creates the account.
pub struct SignUpController {
    email_validator: Box<dyn EmailValidator>,
    add_account: Box<dyn AddAccount>,
}

impl SignUpController {
    /// Create a new [`SignUpController`].
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        add_account: Box<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(&self, body: Body) -> Result<AccountModel, SignUpError> {
        let name = required("name", body.name)?;
        let email = required("email", body.email)?;
        let password = required("password", body.password)?;
        let password_confirmation =
            required("passwordConfirmation", body.password_confirmation)?;

        if password != password_confirmation {
            return Err(SignUpError::InvalidParam("passwordConfirmation"));
        }

        if !self.email_validator.is_valid(&email).map_err(fault)? {
            return Err(SignUpError::InvalidParam("email"));
        }

        self.add_account
            .add(AddAccountModel {
                name,
                email,
                password,
            })
            .await
            .map_err(fault)
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Body = Body;

    #[tracing::instrument(skip_all, name = "signup")]
    async fn handle(&self, request: HttpRequest<Body>) -> HttpResponse {
        let response = match self.sign_up(request.body).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "account created");
                ok(account)
            },
            Err(err) => {
                tracing::debug!(
                    status = %err.status(),
                    reason = %err,
                    "signup rejected"
                );
                err.into()
            },
        };

        metrics::counter!(
            SIGNUP_RESPONSES,
            "status" => response.status_code.as_u16().to_string()
        )
        .increment(1);

        response
    }
}
