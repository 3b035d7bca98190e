use std::time::Duration;

use crate::{
    config::Config,
    error,
    server::start_api_server,
    spotify::auth::{AuthSession, BrowserAuthorizer},
    success,
};

const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the browser login and returns a session holding the token.
///
/// Starts the redirect server, opens the authorize page and waits for the
/// callback. Exits the process if the login fails or times out.
pub async fn login(config: &Config) -> AuthSession {
    let session = AuthSession::new();

    let server_session = session.clone();
    let addr = config.server_addr;
    tokio::spawn(async move {
        if let Err(e) = start_api_server(addr, server_session).await {
            error!("Failed to start callback server on {}: {}", addr, e);
        }
    });

    let authorizer = BrowserAuthorizer::new(config.auth_url.as_str());
    if let Err(e) = session
        .begin_login(
            &authorizer,
            &config.client_id,
            &config.redirect_uri,
            config.scopes.clone(),
        )
        .await
    {
        error!("Failed to start Spotify login: {}", e);
    }

    let pb = super::spinner("Waiting for Spotify login...");
    let token = session.wait_for_token(LOGIN_TIMEOUT).await;
    pb.finish_and_clear();

    match token {
        Some(_) => success!("Logged in to Spotify."),
        None => error!("Authentication failed or timed out."),
    }

    session
}
