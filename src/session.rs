//! Account session: plugin settings bound to an API client.
//!
//! Network flows that update settings are split in three steps so that a
//! host running several of them at once keeps only the newest result:
//!
//! 1. `begin_*` (needs `&mut self`) takes a [`RequestTicket`] (wrapped in a
//!    [`LoginAttempt`] for logins);
//! 2. `fetch_*` (needs `&self`) performs the calls;
//! 3. `finish_*` (needs `&mut self`) applies the result if the ticket is
//!    still current and reports [`Outcome::Superseded`] otherwise.
//!
//! `login_with_token` and `refresh_user_info` run all three steps in
//! sequence for callers that never overlap flows.

use crate::client::ApiClient;
use crate::config::{ConfigError, PluginSettings};
use crate::executor::{GenerationGuard, ReqwestTransport, RequestError, RequestTicket, Transport};
use crate::models::api::TokenVerification;
use crate::models::user::{SubscriptionLevel, UserInfo};
use std::fmt;

/// Errors from session flows.
#[derive(Debug)]
pub enum SessionError {
    /// The token entered was empty.
    EmptyToken,

    /// The service rejected the token.
    InvalidToken,

    /// A service call failed.
    Request(RequestError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyToken => write!(f, "Token is empty"),
            SessionError::InvalidToken => write!(f, "Invalid token"),
            SessionError::Request(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<RequestError> for SessionError {
    fn from(err: RequestError) -> Self {
        SessionError::Request(err)
    }
}

/// Result of finishing a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The flow was current and its result was applied.
    Applied(T),
    /// A newer flow (or a logout) started meanwhile; the result was dropped.
    Superseded,
}

/// What a login fetch learned about a token.
#[derive(Debug, Clone)]
pub struct AccountCheck {
    pub verification: TokenVerification,
    /// Fetched only when the token verified.
    pub user: Option<UserInfo>,
}

/// A login in progress: its ticket and the token being checked.
#[derive(Debug, Clone)]
pub struct LoginAttempt {
    ticket: RequestTicket,
    token: String,
}

impl LoginAttempt {
    pub fn ticket(&self) -> &RequestTicket {
        &self.ticket
    }
}

/// Settings plus the client configured from them.
pub struct AccountSession<T = ReqwestTransport> {
    settings: PluginSettings,
    client: ApiClient<T>,
    guard: GenerationGuard,
}

impl<T: Transport> AccountSession<T> {
    /// Configures a client from `settings`.
    pub fn new(settings: PluginSettings, transport: T) -> Self {
        let mut client = ApiClient::with_transport(transport);
        client.configure(Some(&settings.server_url));
        client.set_token(settings.token.as_deref());
        Self {
            settings,
            client,
            guard: GenerationGuard::new(),
        }
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Consumes the session, returning settings for the host to persist.
    pub fn into_settings(self) -> PluginSettings {
        self.settings
    }

    pub fn level(&self) -> Option<SubscriptionLevel> {
        self.settings.level
    }

    /// Label of the current subscription level, empty when signed out.
    pub fn level_label(&self) -> &'static str {
        SubscriptionLevel::label_for(self.settings.level)
    }

    /// Points the session at another service address.
    pub fn set_server_url(&mut self, server_url: &str) -> Result<(), ConfigError> {
        let mut updated = self.settings.clone();
        updated.server_url = server_url.trim().to_string();
        updated.validate().map_err(ConfigError::Invalid)?;

        self.client.configure(Some(&updated.server_url));
        self.settings = updated;
        Ok(())
    }

    /// Starts logging in with `token`.
    ///
    /// The candidate token travels with the returned [`LoginAttempt`]; the
    /// client keeps its current token until the login is applied.
    pub fn begin_login(&mut self, token: &str) -> Result<LoginAttempt, SessionError> {
        let token = crate::auth::bearer::normalize_token(token).ok_or(SessionError::EmptyToken)?;
        let ticket = self.guard.begin();
        log::debug!("[{}] login started", ticket.request_id);
        Ok(LoginAttempt { ticket, token })
    }

    /// Verifies the attempt's token and, if valid, fetches its account.
    pub async fn fetch_account(&self, attempt: &LoginAttempt) -> Result<AccountCheck, RequestError> {
        let verification = self.client.verify_token(&attempt.token).await?;
        let user = if verification.ok {
            Some(self.client.get_user_info_for(&attempt.token).await?)
        } else {
            None
        };
        Ok(AccountCheck { verification, user })
    }

    /// Applies a login result.
    ///
    /// Only a current, verified attempt installs its token; otherwise the
    /// client and settings are left as they were.
    pub fn finish_login(
        &mut self,
        attempt: LoginAttempt,
        result: Result<AccountCheck, RequestError>,
    ) -> Result<Outcome<UserInfo>, SessionError> {
        let LoginAttempt { ticket, token } = attempt;
        if !self.guard.is_current(&ticket) {
            log::debug!("[{}] discarding superseded login", ticket.request_id);
            return Ok(Outcome::Superseded);
        }

        let check = result?;
        let user = match (check.verification.ok, check.user) {
            (true, Some(user)) => user,
            _ => {
                log::warn!("[{}] token rejected", ticket.request_id);
                return Err(SessionError::InvalidToken);
            }
        };

        self.client.set_token(Some(&token));
        self.settings.token = Some(token);
        self.settings.apply_user_info(user.clone());
        log::info!("[{}] logged in as {}", ticket.request_id, user.name);
        Ok(Outcome::Applied(user))
    }

    /// Verifies `token`, fetches the account, and stores both.
    pub async fn login_with_token(&mut self, token: &str) -> Result<Outcome<UserInfo>, SessionError> {
        let attempt = self.begin_login(token)?;
        let result = self.fetch_account(&attempt).await;
        self.finish_login(attempt, result)
    }

    /// Starts refreshing the cached account information.
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.guard.begin()
    }

    /// Fetches the current account information.
    pub async fn fetch_user_info(&self) -> Result<UserInfo, RequestError> {
        self.client.get_user_info().await
    }

    /// Replaces the cached account with a fetched one.
    pub fn finish_refresh(
        &mut self,
        ticket: &RequestTicket,
        result: Result<UserInfo, RequestError>,
    ) -> Result<Outcome<UserInfo>, SessionError> {
        if !self.guard.is_current(ticket) {
            log::debug!("[{}] discarding superseded refresh", ticket.request_id);
            return Ok(Outcome::Superseded);
        }

        let user = result?;
        self.settings.apply_user_info(user.clone());
        Ok(Outcome::Applied(user))
    }

    /// Fetches the account information and replaces the cache with it.
    pub async fn refresh_user_info(&mut self) -> Result<Outcome<UserInfo>, SessionError> {
        let ticket = self.begin_refresh();
        let result = self.fetch_user_info().await;
        self.finish_refresh(&ticket, result)
    }

    /// Signs out: forgets the token and cached account, and drops any
    /// response still in flight.
    pub fn logout(&mut self) {
        self.guard.invalidate();
        self.settings.clear_account();
        self.client.set_token(None);
        log::info!("logged out");
    }
}
