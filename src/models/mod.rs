//! Data models for HTTP requests, responses and service payloads.

pub mod api;
pub mod request;
pub mod response;
pub mod user;

pub use api::{ArticleWord, ArticleWordList, HealthStatus, Stats, TokenVerification};
pub use request::{HttpMethod, HttpRequest};
pub use response::HttpResponse;
pub use user::{SubscriptionLevel, UserId, UserInfo};
