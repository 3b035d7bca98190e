//! Shared helpers for the integration tests.
#![allow(dead_code)]

use std::{collections::BTreeSet, sync::Mutex};

use shufflerion::{
    Res,
    spotify::{
        SpotifyApi,
        auth::{AuthSession, Authorizer},
    },
    types::{AccessToken, AuthorizationRequest, AuthorizationResult, Device},
    utils::parse_scopes,
};
use wiremock::MockServer;

pub const TRACK_URI: &str = "spotify:track:2s99JIa7LENyy9vmtBCrwR";
pub const CLIENT_ID: &str = "335ea7b32dd24009bd0529ba85f0f8cc";
pub const REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

/// Authorizer that only remembers what it was asked to do.
#[derive(Default)]
pub struct RecordingAuthorizer {
    calls: Mutex<Vec<(AuthorizationRequest, String)>>,
}

impl RecordingAuthorizer {
    pub fn calls(&self) -> Vec<(AuthorizationRequest, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Authorizer for RecordingAuthorizer {
    fn authorize(&self, request: &AuthorizationRequest, correlation_id: &str) -> Res<()> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), correlation_id.to_string()));
        Ok(())
    }
}

pub struct FailingAuthorizer;

impl Authorizer for FailingAuthorizer {
    fn authorize(&self, _request: &AuthorizationRequest, _correlation_id: &str) -> Res<()> {
        Err("no browser available".into())
    }
}

pub fn scopes() -> BTreeSet<String> {
    parse_scopes("streaming user-modify-playback-state user-read-playback-state")
}

pub async fn begin_login(session: &AuthSession) -> String {
    session
        .begin_login(&RecordingAuthorizer::default(), CLIENT_ID, REDIRECT_URI, scopes())
        .await
        .unwrap()
}

/// A session that completed a login with `token`.
pub async fn logged_in_session(token: &str) -> AuthSession {
    let session = AuthSession::new();
    let id = begin_login(&session).await;
    assert!(
        session
            .on_authorization_result(&id, AuthorizationResult::Token(AccessToken::new(token)))
            .await
    );
    session
}

pub fn api_for(server: &MockServer) -> SpotifyApi {
    SpotifyApi::new(server.uri())
}

/// Base URL of a port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn device(id: &str, name: &str) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        kind: "Smartphone".to_string(),
        is_active: false,
    }
}
