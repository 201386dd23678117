//! Session cookie handling and the authentication gate.

use crate::error::AppError;
use crate::state::AppState;
use axum::http::{header, HeaderMap, HeaderValue};

pub const SESSION_COOKIE: &str = "session_token";

/// Pull the value of cookie `name` out of the request's `Cookie` headers.
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(s) = value.to_str() else { continue };
        for part in s.split(';') {
            if let Some((k, v)) = part.trim().split_once('=') {
                if k == name {
                    return Some(v.to_string());
                }
            }
        }
    }
    None
}

pub fn session_token(headers: &HeaderMap) -> Option<String> {
    parse_cookie(headers, SESSION_COOKIE)
}

pub fn set_session_cookie(token: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(&format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/",
        SESSION_COOKIE, token
    ))
    .map_err(|e| AppError::Internal(e.to_string()))
}

pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static(
        "session_token=; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; HttpOnly; SameSite=Lax; Path=/",
    )
}

/// The username behind the request's session cookie, if any.
pub async fn current_user(state: &AppState, headers: &HeaderMap) -> Option<String> {
    let token = session_token(headers);
    let sessions = state.sessions.read().await;
    sessions.resolve(token.as_deref()).map(str::to_string)
}

pub async fn require_auth(state: &AppState, headers: &HeaderMap) -> Result<String, AppError> {
    current_user(state, headers)
        .await
        .ok_or(AppError::Unauthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::CredentialDirectory;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn parses_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; session_token=abc-123; lang=en");
        assert_eq!(session_token(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn missing_cookie() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        assert_eq!(session_token(&headers_with_cookie("session=abc")), None);
    }

    #[test]
    fn session_cookie_attributes() {
        let value = set_session_cookie("tok").unwrap();
        let s = value.to_str().unwrap();
        assert!(s.starts_with("session_token=tok;"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn gate_resolves_live_sessions_only() {
        let state = AppState::seeded(CredentialDirectory::default());
        let token = state.sessions.write().await.create("mchen").unwrap();
        let headers = headers_with_cookie(&format!("session_token={}", token));

        assert_eq!(current_user(&state, &headers).await.as_deref(), Some("mchen"));
        assert_eq!(require_auth(&state, &headers).await.unwrap(), "mchen");

        state.sessions.write().await.destroy(&token);
        assert_eq!(
            require_auth(&state, &headers).await,
            Err(AppError::Unauthenticated)
        );
        assert_eq!(
            require_auth(&state, &HeaderMap::new()).await,
            Err(AppError::Unauthenticated)
        );
    }
}
