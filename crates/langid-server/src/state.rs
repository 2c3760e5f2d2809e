//! Shared application state

use crate::config::ServerConfig;
use langid_model::ModelRegistry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Models loaded at startup
    pub registry: Arc<ModelRegistry>,

    /// Handle for rendering Prometheus metrics
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(config: ServerConfig, registry: ModelRegistry, metrics: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            metrics,
        }
    }
}
