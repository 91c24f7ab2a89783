//! HTTP authentication for service calls.
//!
//! The client owns the `Authorization` header: whatever the caller put there
//! is discarded and replaced by the session's bearer token, or left absent
//! when no token is set.

pub mod bearer;

use crate::models::request::HttpRequest;

/// Name of the header carrying credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Applies the session credentials to `request`.
///
/// Any caller-supplied `Authorization` header (in any casing) is removed
/// first. With `Some(token)` the header becomes `Bearer <token>`; with `None`
/// the request carries no `Authorization` header at all.
pub fn apply_bearer(request: &mut HttpRequest, token: Option<&str>) {
    request.remove_header(AUTHORIZATION);
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        request.set_header(AUTHORIZATION, bearer::bearer_token(token));
    }
}
