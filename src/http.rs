//! Transport-neutral request and response envelopes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::dto::AccountModel;
use crate::error::SignUpError;

/// Incoming request as seen by a controller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HttpRequest<B> {
    pub body: B,
}

/// Error payload sent on `4xx` and `5xx` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(AccountModel),
    Error(ErrorBody),
}

/// Response envelope: status code plus body, built once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Message of an error body, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Error(err) => Some(&err.message),
            ResponseBody::Account(_) => None,
        }
    }
}

/// `200 OK` carrying the created account.
pub fn ok(account: AccountModel) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: ResponseBody::Account(account),
    }
}

/// `400 Bad Request` carrying the violated rule.
pub fn bad_request(error: SignUpError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(ErrorBody {
            message: error.to_string(),
        }),
    }
}

/// `500 Internal Server Error` with a generic message.
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(ErrorBody {
            message: SignUpError::Server.to_string(),
        }),
    }
}

impl From<SignUpError> for HttpResponse {
    fn from(error: SignUpError) -> Self {
        match error {
            SignUpError::Server => server_error(),
            SignUpError::MissingParam(_) | SignUpError::InvalidParam(_) => {
                bad_request(error)
            },
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
