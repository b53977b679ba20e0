//! Current status resolver for the process.
//!
//! Readers take an `Arc` snapshot and keep using it even if the resolver is
//! replaced meanwhile; a reload swaps the whole resolver under the write
//! lock, tables are never edited in place.

use contracts::shared::status::{StatusConfigError, StatusResolver};
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

use super::config::StatusConfig;

pub static STATUS_REGISTRY: Lazy<Arc<StatusRegistry>> =
    Lazy::new(|| Arc::new(StatusRegistry::new(StatusResolver::default())));

pub struct StatusRegistry {
    current: RwLock<Arc<StatusResolver>>,
}

impl StatusRegistry {
    pub fn new(resolver: StatusResolver) -> Self {
        Self {
            current: RwLock::new(Arc::new(resolver)),
        }
    }

    /// Snapshot of the active resolver
    pub fn current(&self) -> Arc<StatusResolver> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install a new resolver. Existing snapshots are unaffected.
    pub fn replace(&self, resolver: StatusResolver) {
        let resolver = Arc::new(resolver);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = resolver;
        tracing::info!("Status resolver replaced");
    }

    /// Rebuild from configuration. On error the active resolver stays in place.
    pub fn reload(&self, config: &StatusConfig) -> Result<(), StatusConfigError> {
        match super::config::build_resolver(config) {
            Ok(resolver) => {
                tracing::info!(
                    "Status resolver reloaded: {} aliases, {} rank overrides",
                    resolver.aliases().len(),
                    config.ranks.len()
                );
                self.replace(resolver);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Status config rejected, keeping current resolver: {}", e);
                Err(e)
            }
        }
    }
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new(StatusResolver::default())
    }
}
