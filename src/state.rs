//! Shared application state injected into every handler.

use crate::catalog::Catalog;
use crate::credentials::CredentialDirectory;
use crate::session::SessionStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe session storage.
pub type Sessions = Arc<RwLock<SessionStore>>;

/// Thread-safe activity catalog. Roster mutations take the write lock for the
/// whole check-and-update.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Sessions,
    pub catalog: SharedCatalog,
    pub credentials: Arc<CredentialDirectory>,
}

impl AppState {
    pub fn new(credentials: CredentialDirectory, catalog: Catalog) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionStore::new())),
            catalog: Arc::new(RwLock::new(catalog)),
            credentials: Arc::new(credentials),
        }
    }

    /// State with the seeded catalog and the given credentials.
    pub fn seeded(credentials: CredentialDirectory) -> Self {
        Self::new(credentials, Catalog::seeded())
    }
}
