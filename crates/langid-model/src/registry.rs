//! Named model registry

use crate::model::LanguageModel;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of loaded models keyed by name.
///
/// Built once at startup from the configured name -> path table. Each entry
/// is loaded individually; a missing or corrupt file is logged and skipped
/// rather than aborting startup, so the server can come up with whatever
/// subset of models is actually present on disk.
#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<String, Arc<LanguageModel>>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every entry of a name -> path table, skipping failures.
    pub fn from_entries(entries: &BTreeMap<String, PathBuf>) -> Self {
        let mut registry = Self::new();

        info!("loading {} configured model(s)", entries.len());

        for (name, path) in entries {
            match LanguageModel::load(name.clone(), path) {
                Ok(model) => {
                    registry.insert(model);
                }
                Err(e) => {
                    warn!(model = %name, "skipping model: {}", e);
                }
            }
        }

        if registry.is_empty() {
            warn!("no models loaded; prediction requests will be rejected");
        } else {
            info!(
                "model registry initialized with {}/{} model(s)",
                registry.len(),
                entries.len()
            );
        }

        registry
    }

    /// Register a loaded model under its name
    pub fn insert(&mut self, model: LanguageModel) {
        self.models.insert(model.name().to_string(), Arc::new(model));
    }

    /// Get a model by name
    pub fn get(&self, name: &str) -> Option<Arc<LanguageModel>> {
        self.models.get(name).cloned()
    }

    /// Names of all loaded models, sorted for stable output
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of loaded models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry holds no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
