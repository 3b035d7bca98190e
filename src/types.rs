use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Opaque bearer credential obtained from the implicit grant.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Token,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Token => "token",
        }
    }
}

/// A single login attempt. Built once by the session and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: ResponseType,
    pub scopes: BTreeSet<String>,
}

impl AuthorizationRequest {
    pub fn new(client_id: &str, redirect_uri: &str, scopes: BTreeSet<String>) -> Self {
        AuthorizationRequest {
            client_id: client_id.to_string(),
            redirect_uri: redirect_uri.to_string(),
            response_type: ResponseType::Token,
            scopes,
        }
    }

    /// Scopes joined the way the authorize endpoint expects them.
    pub fn scope(&self) -> String {
        self.scopes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outcome of one login attempt, as delivered by the redirect callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResult {
    Token(AccessToken),
    Error(String),
    Unhandled(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Device {
    /// Empty when Spotify reports `null`, which it does for restricted devices.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Device {
    /// Restricted devices come without an id and can't be controlled through the Web API.
    pub fn is_restricted(&self) -> bool {
        self.id.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevicesResponse {
    #[serde(default)]
    pub devices: Option<Vec<Device>>,
}

#[derive(Tabled)]
pub struct DeviceTableRow {
    pub name: String,
    pub kind: String,
    pub active: String,
    pub id: String,
}

impl From<&Device> for DeviceTableRow {
    fn from(device: &Device) -> Self {
        DeviceTableRow {
            name: device.name.clone(),
            kind: device.kind.clone(),
            active: if device.is_active { "yes" } else { "" }.to_string(),
            id: device.id.clone(),
        }
    }
}

/// What was asked of the player. Returned as the acknowledgement of a successful play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackCommand {
    pub track_uri: String,
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartPlaybackRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
