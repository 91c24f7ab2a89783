//! Bearer token authentication.
//!
//! Formats `Authorization: Bearer <token>` header values according to
//! RFC 6750.

/// Formats a token into a Bearer authentication header value.
///
/// # Examples
///
/// ```
/// use word_gpt_core::auth::bearer::bearer_token;
///
/// let auth_header = bearer_token("abc123xyz");
/// assert_eq!(auth_header, "Bearer abc123xyz");
/// ```
pub fn bearer_token(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Normalizes a user-entered token.
///
/// Surrounding whitespace is dropped and an empty result means "no token",
/// so callers never end up sending `Bearer ` with nothing after it.
pub fn normalize_token(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
