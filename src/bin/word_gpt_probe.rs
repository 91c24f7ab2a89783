//! Word GPT service probe.
//!
//! Loads the plugin settings file given as the first argument (or
//! `data.json` in the working directory), checks that the configured service
//! is alive, and, when a token is stored, verifies it and prints the account
//! it belongs to. Set `RUST_LOG=debug` to see every request.

use std::path::PathBuf;
use std::process::ExitCode;
use word_gpt_core::client::ApiClient;
use word_gpt_core::config::load_settings_file;
use word_gpt_core::models::user::SubscriptionLevel;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data.json"));

    let settings = match load_settings_file(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut client = match ApiClient::new() {
        Ok(client) => client,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    client.configure(Some(&settings.server_url));
    client.set_token(settings.token.as_deref());

    match client.get_health().await {
        Ok(health) => println!("health: {}", health.status),
        Err(e) => {
            log::error!("health check against {} failed: {}", settings.server_url, e);
            return ExitCode::FAILURE;
        }
    }

    if !client.is_authenticated() {
        println!("no token stored; skipping account checks");
        return ExitCode::SUCCESS;
    }

    match client.verify().await {
        Ok(verification) if verification.ok => println!("token: valid"),
        Ok(_) => {
            println!("token: rejected");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            log::error!("token verification failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    match client.get_user_info().await {
        Ok(user) => {
            println!("user: {} ({})", user.name, user.openid);
            println!("level: {}", SubscriptionLevel::label_for(user.current_level));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("fetching user info failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
