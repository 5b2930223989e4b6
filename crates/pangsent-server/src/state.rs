//! Shared application state

use crate::config::ServerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use pangsent_resolver::Resolver;
use std::sync::Arc;
use tracing::info;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Immutable resolver, shared by every handler
    pub resolver: Arc<Resolver>,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    /// Build the resolver from configuration
    pub fn new(config: ServerConfig, metrics_handle: PrometheusHandle) -> anyhow::Result<Self> {
        let resolver = Resolver::from_config(&config.analyzer)?;
        info!("Translator: {}", resolver.translator().translator_name());

        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            metrics_handle,
        })
    }

    /// Wrap an already-built resolver
    pub fn with_resolver(
        config: ServerConfig,
        resolver: Resolver,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            metrics_handle,
        }
    }
}
