use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::spotify::auth::AuthSession;

pub async fn health(Extension(session): Extension<AuthSession>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "login_pending": session.is_pending().await,
        "authenticated": session.current_token().await.is_some(),
    }))
}
