//! Plugin settings schema.
//!
//! These are the values the host persists on the core's behalf: where the
//! service lives, the bearer token, and a cache of the account it belongs to.

use crate::models::user::{SubscriptionLevel, UserInfo};
use serde::{Deserialize, Serialize};

/// Locally persisted plugin settings.
///
/// Missing fields fall back to defaults, so settings written by older plugin
/// versions still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSettings {
    /// Base URL of the vocabulary service.
    ///
    /// An empty string leaves the client unconfigured. Defaults to
    /// `http://127.0.0.1:8000`.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Bearer token of the signed-in account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Display name of the signed-in account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Subscription level of the signed-in account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SubscriptionLevel>,

    /// Last account information fetched from the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            token: None,
            username: None,
            level: None,
            user_info: None,
        }
    }
}

impl PluginSettings {
    /// Validates the settings and returns a descriptive error if any value is
    /// unusable.
    pub fn validate(&self) -> Result<(), String> {
        let server_url = self.server_url.trim();
        if server_url.is_empty() {
            return Ok(());
        }

        let parsed = url::Url::parse(server_url)
            .map_err(|e| format!("serverUrl is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(format!(
                "serverUrl must use http or https, got: {}",
                parsed.scheme()
            ));
        }

        Ok(())
    }

    /// Whether a token is stored.
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }

    /// Replaces the cached account with `info`.
    ///
    /// The cache is swapped as a whole; the username and level shown in the
    /// settings follow the new account.
    pub fn apply_user_info(&mut self, info: UserInfo) {
        self.username = Some(info.name.clone()).filter(|n| !n.is_empty());
        self.level = info.current_level;
        self.user_info = Some(info);
    }

    /// Forgets the token and everything cached about the account.
    pub fn clear_account(&mut self) {
        self.token = None;
        self.username = None;
        self.level = None;
        self.user_info = None;
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
