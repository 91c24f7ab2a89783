//! Response and request bodies of the service endpoints.

use serde::{Deserialize, Serialize};

use super::user::UserInfo;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}

/// Body of `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub reviewed: u64,
    #[serde(default)]
    pub due_today: u64,
}

/// Body of `GET /api/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenVerification {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub token: String,
    /// Present when the service resolved the token to an account.
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// A vocabulary entry attached to one article of one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleWord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub openid: String,
    pub word: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub ai_memory: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /ladr-article-word-list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleWordList {
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub article_id: String,
    #[serde(default)]
    pub words: Vec<ArticleWord>,
}

/// Request body addressing an article's word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRef<'a> {
    pub openid: &'a str,
    pub article_id: &'a str,
}

/// Request body addressing one word of an article's word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleWordRef<'a> {
    pub openid: &'a str,
    pub article_id: &'a str,
    pub word: &'a str,
}
