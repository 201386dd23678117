//! HTTP server implementation using Axum.

use crate::auth::{self, require_auth};
use crate::catalog::Catalog;
use crate::error::{AppError, ConfigError};
use crate::roster;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

/// Where to listen and what to serve under `/static`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

// Request/Response types
#[derive(Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Serialize)]
struct LoginResponse {
    message: &'static str,
    username: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct AuthStatus {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

/// Build the application router. Split from [`run_server`] so tests can drive
/// it without a socket.
pub fn router(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(root))
        // Auth
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/auth/status", get(auth_status))
        // Catalog and rosters
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .route("/activities/:name/unregister", delete(unregister))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server with the provided config and state.
pub async fn run_server(config: ServerConfig, state: AppState) -> Result<(), ConfigError> {
    let app = router(state, config.static_dir.clone());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ConfigError::Bind { addr, source })?;
    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, app).await.map_err(ConfigError::Serve)
}

async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    if !state.credentials.authenticate(&req.username, &req.password) {
        warn!(username = %req.username, "Rejected login");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.write().await.create(&req.username)?;
    let cookie = auth::set_session_cookie(&token)?;
    info!(username = %req.username, "Teacher logged in");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful",
            username: req.username,
        }),
    ))
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = auth::session_token(&headers) {
        if state.sessions.write().await.destroy(&token) {
            info!("Session logged out");
        }
    }
    (
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

async fn auth_status(State(state): State<AppState>, headers: HeaderMap) -> Json<AuthStatus> {
    let username = auth::current_user(&state, &headers).await;
    Json(AuthStatus {
        authenticated: username.is_some(),
        username,
    })
}

async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.read().await.clone())
}

async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = require_auth(&state, &headers).await?;
    let Query(EmailQuery { email }) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut catalog = state.catalog.write().await;
    let message = roster::signup(&mut catalog, &name, &email, &user)?;
    Ok(Json(MessageResponse { message }))
}

async fn unregister(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = require_auth(&state, &headers).await?;
    let Query(EmailQuery { email }) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut catalog = state.catalog.write().await;
    let message = roster::unregister(&mut catalog, &name, &email, &user)?;
    Ok(Json(MessageResponse { message }))
}
