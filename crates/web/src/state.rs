//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StylistConfig;
use crate::db::{AccountStore, DesignStore};
use crate::gemini::GeminiClient;
use crate::services::{AuthService, StylistService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources: configuration, the persisted collections, and the styling
/// services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StylistConfig,
    designs: DesignStore,
    auth: AuthService,
    stylist: StylistService,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Stores are bound to the configured data directory; the Gemini client
    /// is built from the configured API key and model.
    #[must_use]
    pub fn new(config: StylistConfig) -> Self {
        let accounts = AccountStore::new(config.accounts_path());
        let designs = DesignStore::new(config.designs_path());
        let auth = AuthService::new(accounts);
        let stylist = StylistService::new(GeminiClient::new(&config.gemini));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                designs,
                auth,
                stylist,
            }),
        }
    }

    /// Get a reference to the stylist configuration.
    #[must_use]
    pub fn config(&self) -> &StylistConfig {
        &self.inner.config
    }

    /// Get a reference to the design store.
    #[must_use]
    pub fn designs(&self) -> &DesignStore {
        &self.inner.designs
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the styling orchestrator.
    #[must_use]
    pub fn stylist(&self) -> &StylistService {
        &self.inner.stylist
    }
}
