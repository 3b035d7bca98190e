use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{
    spotify::auth::AuthSession,
    types::{AccessToken, AuthorizationResult},
};

/// Implicit grant results arrive in the URL fragment, which browsers never
/// send to the server. This page moves the fragment into the query string and
/// reloads the callback.
const RELAY_PAGE: &str = r#"<!doctype html>
<html>
<head><title>Shufflerion</title></head>
<body>
<p id="status">Completing login...</p>
<script>
if (window.location.hash.length > 1) {
  window.location.replace(window.location.pathname + "?" + window.location.hash.substring(1));
} else {
  document.getElementById("status").textContent = "Missing authorization response.";
}
</script>
</body>
</html>
"#;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(session): Extension<AuthSession>,
) -> Html<&'static str> {
    let Some(state) = params.get("state") else {
        return Html(RELAY_PAGE);
    };

    let result = authorization_result(&params);
    let logged_in = matches!(result, AuthorizationResult::Token(_));

    if !session.on_authorization_result(state, result).await {
        return Html("<h4>Unknown or expired login attempt.</h4>");
    }

    if logged_in {
        Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
    } else {
        Html("<h4>Login failed.</h4>")
    }
}

/// Maps the redirect parameters of an implicit grant onto an [`AuthorizationResult`].
///
/// `access_token` wins over `error`. A `code` parameter means the platform
/// answered with an authorization code flow, which is reported as unhandled.
pub fn authorization_result(params: &HashMap<String, String>) -> AuthorizationResult {
    if let Some(token) = params.get("access_token").filter(|t| !t.is_empty()) {
        return AuthorizationResult::Token(AccessToken::new(token.as_str()));
    }

    if let Some(error) = params.get("error") {
        let reason = match params.get("error_description") {
            Some(description) => format!("{}: {}", error, description),
            None => error.clone(),
        };
        return AuthorizationResult::Error(reason);
    }

    let kind = if params.contains_key("code") {
        "code"
    } else {
        "empty"
    };
    AuthorizationResult::Unhandled(kind.to_string())
}
