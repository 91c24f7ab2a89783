//! Account data returned by the service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription tier of an account.
///
/// The service reports the tier as free text; anything other than the known
/// tiers decodes as `Unknown` instead of failing the whole reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionLevel {
    Free,
    Plus,
    Pro,
    #[serde(other)]
    Unknown,
}

impl SubscriptionLevel {
    /// Human-readable label shown next to the account.
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionLevel::Free => "免费版",
            SubscriptionLevel::Plus => "Plus版",
            SubscriptionLevel::Pro => "专业版",
            SubscriptionLevel::Unknown => "",
        }
    }

    /// Label for an optional level; no level renders as an empty string.
    pub fn label_for(level: Option<SubscriptionLevel>) -> &'static str {
        level.map(|l| l.label()).unwrap_or("")
    }
}

/// User identifier; the service has used both numeric and textual ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl Default for UserId {
    fn default() -> Self {
        UserId::Number(0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Account information from `/ladr-user-info`.
///
/// Cached locally and always replaced as a whole, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: UserId,
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub current_level: Option<SubscriptionLevel>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
