//! In-memory session store mapping opaque tokens to usernames.
//!
//! Sessions live for the lifetime of the process. There is no TTL and no
//! background cleanup; restarting the server logs everybody out.

use crate::error::AppError;
use base64::Engine;
use std::collections::HashMap;

/// Bytes of OS randomness behind each token.
pub const TOKEN_BYTES: usize = 32;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, String>,
}

fn gen_token() -> Result<String, AppError> {
    let mut buf = [0u8; TOKEN_BYTES];
    getrandom::getrandom(&mut buf).map_err(|e| AppError::Internal(format!("rng: {}", e)))?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf))
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for `username` and remember it.
    pub fn create(&mut self, username: &str) -> Result<String, AppError> {
        let mut token = gen_token()?;
        while self.sessions.contains_key(&token) {
            token = gen_token()?;
        }
        self.sessions.insert(token.clone(), username.to_string());
        Ok(token)
    }

    pub fn resolve(&self, token: Option<&str>) -> Option<&str> {
        token
            .and_then(|t| self.sessions.get(t))
            .map(String::as_str)
    }

    /// Remove the session if present. Returns whether anything was removed.
    pub fn destroy(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_resolve() {
        let mut store = SessionStore::new();
        let token = store.create("mrodriguez").unwrap();
        assert_eq!(store.resolve(Some(&token)), Some("mrodriguez"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn tokens_are_long_and_distinct() {
        let mut store = SessionStore::new();
        let a = store.create("alice").unwrap();
        let b = store.create("alice").unwrap();
        assert_ne!(a, b);
        // 32 bytes, unpadded base64
        assert_eq!(a.len(), 43);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn resolve_missing_or_absent() {
        let store = SessionStore::new();
        assert_eq!(store.resolve(None), None);
        assert_eq!(store.resolve(Some("nope")), None);
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut store = SessionStore::new();
        let token = store.create("bob").unwrap();
        assert!(store.destroy(&token));
        assert!(!store.destroy(&token));
        assert_eq!(store.resolve(Some(&token)), None);
        assert!(store.is_empty());
    }
}
