//! Word GPT core
//!
//! Host-independent logic of the Word GPT editor plugin: a client for the
//! vocabulary service and the state behind the word panel.
//!
//! # Architecture
//!
//! - **models**: HTTP request/response types and service payloads
//! - **executor**: the [`Transport`](executor::Transport) seam, the reqwest
//!   transport, error types and the latest-response-wins guard
//! - **auth**: bearer token handling; the client owns `Authorization`
//! - **client**: [`ApiClient`](client::ApiClient) and the typed endpoints
//! - **config**: plugin settings, loaded from and saved to JSON
//! - **session**: settings bound to a client (login, refresh, logout)
//! - **tracker**: selected words, local vocabulary and the display snapshot
//!
//! # Usage
//!
//! ```no_run
//! use word_gpt_core::client::ApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = ApiClient::new()?;
//! client.configure(Some("http://127.0.0.1:8000"));
//! client.set_token(Some("my-token"));
//!
//! let words = client.get_article_word_list("openid", "article-1").await?;
//! for word in &words.words {
//!     println!("{}: {}", word.word, word.definition);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The host owns rendering, commands and file access. It forwards editor
//! events to a [`VocabularyTracker`](tracker::VocabularyTracker) together
//! with a [`DocumentSource`](tracker::DocumentSource) and draws the returned
//! [`Snapshot`](tracker::Snapshot).

pub mod auth;
pub mod client;
pub mod config;
pub mod executor;
pub mod models;
pub mod session;
pub mod tracker;

pub use client::{ApiClient, CallOptions};
pub use config::PluginSettings;
pub use executor::{RequestError, Transport};
pub use session::{AccountSession, LoginAttempt, Outcome, SessionError};
pub use tracker::{Snapshot, TrackerEvent, VocabularyTracker};
