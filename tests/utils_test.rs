use std::collections::{BTreeSet, HashMap};

use shufflerion::api::authorization_result;
use shufflerion::config::{self, Config};
use shufflerion::error::ConfigError;
use shufflerion::spotify::auth::authorize_url;
use shufflerion::types::{AccessToken, AuthorizationRequest, AuthorizationResult};
use shufflerion::utils::*;

// Helper function to build redirect parameters
fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// Helper function to build a config lookup from fixed values
fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name| {
        pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_generate_correlation_id() {
    let id = generate_correlation_id();

    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two attempts never share an id
    assert_ne!(id, generate_correlation_id());
}

#[test]
fn test_parse_scopes() {
    let scopes = parse_scopes("streaming  user-modify-playback-state,user-read-playback-state");

    let expected: BTreeSet<String> = [
        "streaming",
        "user-modify-playback-state",
        "user-read-playback-state",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(scopes, expected);

    assert!(parse_scopes("   ").is_empty());
}

#[test]
fn test_describe_error_includes_sources() {
    let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
    let outer = std::io::Error::new(std::io::ErrorKind::Other, inner);

    let message = describe_error(&outer);

    assert!(message.contains("Connection refused"));
}

#[test]
fn test_authorize_url_carries_implicit_grant_parameters() {
    let request = AuthorizationRequest::new(
        "client123",
        "http://127.0.0.1:8888/callback",
        parse_scopes("user-read-playback-state streaming"),
    );

    let url = authorize_url("https://accounts.spotify.com/authorize", &request, "abc").unwrap();
    let query: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");
    assert_eq!(query["client_id"], "client123");
    assert_eq!(query["response_type"], "token");
    assert_eq!(query["redirect_uri"], "http://127.0.0.1:8888/callback");
    assert_eq!(query["scope"], "streaming user-read-playback-state");
    assert_eq!(query["state"], "abc");
}

#[test]
fn test_authorize_url_rejects_invalid_base() {
    let request = AuthorizationRequest::new("c", "r", BTreeSet::new());

    assert!(authorize_url("not a url", &request, "abc").is_err());
}

#[test]
fn test_authorization_result_from_redirect() {
    assert_eq!(
        authorization_result(&params(&[
            ("access_token", "BQC"),
            ("token_type", "Bearer"),
            ("state", "s")
        ])),
        AuthorizationResult::Token(AccessToken::new("BQC"))
    );

    assert_eq!(
        authorization_result(&params(&[("error", "access_denied"), ("state", "s")])),
        AuthorizationResult::Error("access_denied".to_string())
    );

    assert_eq!(
        authorization_result(&params(&[
            ("error", "invalid_client"),
            ("error_description", "Invalid redirect URI")
        ])),
        AuthorizationResult::Error("invalid_client: Invalid redirect URI".to_string())
    );

    assert_eq!(
        authorization_result(&params(&[("code", "AQD"), ("state", "s")])),
        AuthorizationResult::Unhandled("code".to_string())
    );

    assert_eq!(
        authorization_result(&params(&[("access_token", ""), ("state", "s")])),
        AuthorizationResult::Unhandled("empty".to_string())
    );
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup(&[("SPOTIFY_API_AUTH_CLIENT_ID", "client123")])).unwrap();

    assert_eq!(config.client_id, "client123");
    assert_eq!(config.redirect_uri, config::DEFAULT_REDIRECT_URI);
    assert_eq!(config.auth_url, config::DEFAULT_AUTH_URL);
    assert_eq!(config.api_url, config::DEFAULT_API_URL);
    assert_eq!(config.server_addr.to_string(), config::DEFAULT_SERVER_ADDRESS);
    assert_eq!(config.track_uri, "spotify:track:2s99JIa7LENyy9vmtBCrwR");
    assert_eq!(config.scopes, parse_scopes(config::DEFAULT_SCOPE));
}

#[test]
fn test_config_overrides() {
    let config = Config::from_lookup(lookup(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client123"),
        ("SPOTIFY_API_URL", "http://localhost:9000"),
        ("SERVER_ADDRESS", "0.0.0.0:9999"),
        ("SPOTIFY_API_AUTH_SCOPE", "streaming"),
        ("SHUFFLERION_TRACK_URI", "spotify:track:abc"),
    ]))
    .unwrap();

    assert_eq!(config.api_url, "http://localhost:9000");
    assert_eq!(config.server_addr.port(), 9999);
    assert_eq!(config.scopes.len(), 1);
    assert_eq!(config.track_uri, "spotify:track:abc");
}

#[test]
fn test_config_requires_client_id() {
    let missing = Config::from_lookup(lookup(&[]));
    assert!(matches!(
        missing,
        Err(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))
    ));

    let blank = Config::from_lookup(lookup(&[("SPOTIFY_API_AUTH_CLIENT_ID", "  ")]));
    assert!(blank.is_err());
}

#[test]
fn test_config_rejects_bad_server_address() {
    let result = Config::from_lookup(lookup(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client123"),
        ("SERVER_ADDRESS", "localhost"),
    ]));

    assert!(matches!(
        result,
        Err(ConfigError::Invalid {
            name: "SERVER_ADDRESS",
            ..
        })
    ));
}

#[test]
fn test_env_template_sits_next_to_env_file() {
    let template = std::path::Path::new(config::ENV_TEMPLATE);

    assert_eq!(template.file_name().unwrap(), ".env.example");
    assert!(template.parent().unwrap().ends_with("shufflerion"));
}
