use std::{collections::BTreeSet, sync::Arc, time::Duration};

use reqwest::Url;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    Res,
    types::{AccessToken, AuthorizationRequest, AuthorizationResult},
    utils, warning,
};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Hands an authorization request to whatever shows the login UI.
///
/// Implementations must not wait for the user. The result comes back later
/// through [`AuthSession::on_authorization_result`].
pub trait Authorizer {
    fn authorize(&self, request: &AuthorizationRequest, correlation_id: &str) -> Res<()>;
}

/// Opens the Spotify authorize page in the default browser.
#[derive(Debug, Clone)]
pub struct BrowserAuthorizer {
    auth_url: String,
}

impl BrowserAuthorizer {
    pub fn new(auth_url: impl Into<String>) -> Self {
        BrowserAuthorizer {
            auth_url: auth_url.into(),
        }
    }
}

impl Authorizer for BrowserAuthorizer {
    fn authorize(&self, request: &AuthorizationRequest, correlation_id: &str) -> Res<()> {
        let url = authorize_url(&self.auth_url, request, correlation_id)?;

        if webbrowser::open(url.as_str()).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
        Ok(())
    }
}

/// Builds the implicit grant authorize URL for one login attempt.
///
/// The correlation id travels as the OAuth `state` parameter and comes back
/// unchanged on the redirect.
pub fn authorize_url(
    auth_url: &str,
    request: &AuthorizationRequest,
    correlation_id: &str,
) -> Res<Url> {
    let scope = request.scope();
    let url = Url::parse_with_params(
        auth_url,
        &[
            ("client_id", request.client_id.as_str()),
            ("response_type", request.response_type.as_str()),
            ("redirect_uri", request.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", correlation_id),
        ],
    )?;
    Ok(url)
}

#[derive(Debug, Default)]
struct SessionState {
    pending: Option<String>,
    token: Option<AccessToken>,
}

/// Login state of the process: the attempt in flight and the current token.
///
/// Clones share the same state. The callback server holds one clone and is
/// the only writer of the token, through [`AuthSession::on_authorization_result`].
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    state: Arc<Mutex<SessionState>>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new login attempt and returns its correlation id.
    ///
    /// Returns as soon as the authorizer has been handed the request. A newer
    /// attempt supersedes an older one: results for the old id are ignored
    /// from here on. If the authorizer fails, no attempt is left pending.
    pub async fn begin_login<A>(
        &self,
        authorizer: &A,
        client_id: &str,
        redirect_uri: &str,
        scopes: BTreeSet<String>,
    ) -> Res<String>
    where
        A: Authorizer + ?Sized,
    {
        let request = AuthorizationRequest::new(client_id, redirect_uri, scopes);
        let correlation_id = utils::generate_correlation_id();

        // register before redirecting so a fast callback can't miss it
        {
            let mut state = self.state.lock().await;
            state.pending = Some(correlation_id.clone());
        }

        debug!(scope = %request.scope(), "Starting Spotify login");
        if let Err(e) = authorizer.authorize(&request, &correlation_id) {
            let mut state = self.state.lock().await;
            if state.pending.as_deref() == Some(correlation_id.as_str()) {
                state.pending = None;
            }
            return Err(e);
        }

        Ok(correlation_id)
    }

    /// Applies the result of a login attempt.
    ///
    /// Returns `false` and changes nothing when `correlation_id` is not the
    /// pending attempt. A matching result ends the attempt; only `Token`
    /// touches the stored credential.
    pub async fn on_authorization_result(
        &self,
        correlation_id: &str,
        result: AuthorizationResult,
    ) -> bool {
        let mut state = self.state.lock().await;
        if state.pending.as_deref() != Some(correlation_id) {
            warn!("Ignoring authorization result for a stale or unknown login attempt");
            return false;
        }
        state.pending = None;

        match result {
            AuthorizationResult::Token(token) => {
                state.token = Some(token);
                info!("Access token received");
            }
            AuthorizationResult::Error(reason) => {
                warn!(reason = %reason, "Spotify authorization failed");
            }
            AuthorizationResult::Unhandled(kind) => {
                warn!(kind = %kind, "Unhandled authorization response");
            }
        }
        true
    }

    pub async fn current_token(&self) -> Option<AccessToken> {
        self.state.lock().await.token.clone()
    }

    pub async fn is_pending(&self) -> bool {
        self.state.lock().await.pending.is_some()
    }

    /// Polls until the pending login attempt has ended, then returns the current token.
    ///
    /// A token from an earlier login is only returned once the new attempt is
    /// over, i.e. it succeeded or failed without replacing it. Gives up with
    /// `None` after `max_wait`.
    pub async fn wait_for_token(&self, max_wait: Duration) -> Option<AccessToken> {
        let deadline = tokio::time::Instant::now() + max_wait;

        loop {
            {
                let state = self.state.lock().await;
                if state.pending.is_none() {
                    return state.token.clone();
                }
            }
            if tokio::time::Instant::now() >= deadline {
                return None;
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL).await;
        }
    }
}
