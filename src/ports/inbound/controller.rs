//! Request handler port.

use async_trait::async_trait;

use crate::http::{HttpRequest, HttpResponse};

/// Turns one request into one response envelope.
///
/// Implementations never fail: every outcome, faults included, is encoded
/// in the returned [`HttpResponse`].
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Send;

    async fn handle(&self, request: HttpRequest<Self::Body>) -> HttpResponse;
}
