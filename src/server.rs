use std::{io, net::SocketAddr};

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{api, spotify::auth::AuthSession};

/// Routes of the redirect server. The redirect URI registered with Spotify
/// must point at `/callback`.
pub fn router(session: AuthSession) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(session))
}

pub async fn start_api_server(addr: SocketAddr, session: AuthSession) -> io::Result<()> {
    let listener = TcpListener::bind(&addr).await?;
    serve(listener, session).await
}

pub async fn serve(listener: TcpListener, session: AuthSession) -> io::Result<()> {
    axum::serve(listener, router(session)).await
}
