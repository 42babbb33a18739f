//! Application state management

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: ContentStore,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create state backed by the demo content store and the system clock
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create state with an injected clock (tests pin timestamps this way)
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: ContentStore::demo(),
                clock,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the content store
    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }
}
