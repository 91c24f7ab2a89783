//! Typed wrappers for the service endpoints.

use super::{ApiClient, CallOptions};
use crate::executor::{RequestError, Transport};
use crate::models::api::{
    ArticleRef, ArticleWordList, ArticleWordRef, HealthStatus, Stats, TokenVerification,
};
use crate::models::request::HttpMethod;
use crate::models::user::UserInfo;

pub const HEALTH_PATH: &str = "/health";
pub const STATS_PATH: &str = "/api/stats";
pub const VERIFY_PATH: &str = "/api/verify";
pub const USER_INFO_PATH: &str = "/ladr-user-info";
pub const ARTICLE_WORD_LIST_PATH: &str = "/ladr-article-word-list";
pub const ARTICLE_INSERT_WORD_PATH: &str = "/ladr-article-insert-word";
pub const ARTICLE_REMOVE_WORD_PATH: &str = "/ladr-article-remove-word";

impl<T: Transport> ApiClient<T> {
    /// Liveness probe. Never sends credentials.
    pub async fn get_health(&self) -> Result<HealthStatus, RequestError> {
        self.call(HttpMethod::GET, HEALTH_PATH, CallOptions::new().anonymous())
            .await
    }

    /// Review statistics of the authenticated account.
    pub async fn get_stats(&self) -> Result<Stats, RequestError> {
        self.call(HttpMethod::GET, STATS_PATH, CallOptions::new())
            .await
    }

    /// Asks the service whether the current token is valid.
    pub async fn verify(&self) -> Result<TokenVerification, RequestError> {
        self.call(HttpMethod::GET, VERIFY_PATH, CallOptions::new())
            .await
    }

    /// Asks the service whether `token` is valid, without installing it.
    pub async fn verify_token(&self, token: &str) -> Result<TokenVerification, RequestError> {
        self.call(HttpMethod::GET, VERIFY_PATH, CallOptions::new().bearer(token))
            .await
    }

    /// Account information for the current token.
    pub async fn get_user_info(&self) -> Result<UserInfo, RequestError> {
        self.call(HttpMethod::GET, USER_INFO_PATH, CallOptions::new())
            .await
    }

    /// Account information for `token`, without installing it.
    pub async fn get_user_info_for(&self, token: &str) -> Result<UserInfo, RequestError> {
        self.call(HttpMethod::GET, USER_INFO_PATH, CallOptions::new().bearer(token))
            .await
    }

    /// Words saved for `article_id` by `openid`.
    pub async fn get_article_word_list(
        &self,
        openid: &str,
        article_id: &str,
    ) -> Result<ArticleWordList, RequestError> {
        let options = CallOptions::new().json(&ArticleRef { openid, article_id })?;
        self.call(HttpMethod::POST, ARTICLE_WORD_LIST_PATH, options)
            .await
    }

    /// Adds `word` to an article's word list.
    ///
    /// The service's reply shape is not fixed, so it is returned as raw JSON
    /// (`{}` when the service answers without a JSON body).
    pub async fn insert_article_word(
        &self,
        openid: &str,
        article_id: &str,
        word: &str,
    ) -> Result<serde_json::Value, RequestError> {
        let options = CallOptions::new().json(&ArticleWordRef {
            openid,
            article_id,
            word,
        })?;
        self.call(HttpMethod::POST, ARTICLE_INSERT_WORD_PATH, options)
            .await
    }

    /// Removes `word` from an article's word list.
    pub async fn remove_article_word(
        &self,
        openid: &str,
        article_id: &str,
        word: &str,
    ) -> Result<serde_json::Value, RequestError> {
        let options = CallOptions::new().json(&ArticleWordRef {
            openid,
            article_id,
            word,
        })?;
        self.call(HttpMethod::POST, ARTICLE_REMOVE_WORD_PATH, options)
            .await
    }
}
