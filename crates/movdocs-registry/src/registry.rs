//! Component registry and resolver.
//!
//! Lookup is an exact-name match against the registered entries. When a name
//! is registered more than once the first entry wins.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::try_join_all;

use crate::entry::{ComponentFile, RegistryEntry};
use crate::loader::{ContentLoader, LoadError};

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Component {0} not found in registry")]
    UnknownComponent(String),

    #[error("Failed to load {component}/{file}: {source}")]
    FileLoadFailure {
        component: String,
        file: String,
        #[source]
        source: LoadError,
    },

    #[error("Loading {component} timed out after {timeout:?}")]
    LoadTimeout { component: String, timeout: Duration },

    #[error("Invalid registry manifest: {0}")]
    Manifest(String),
}

/// The registered component table plus the loader used to resolve files.
pub struct ComponentRegistry {
    entries: Vec<RegistryEntry>,
    loader: Arc<dyn ContentLoader>,
    timeout: Option<Duration>,
}

impl ComponentRegistry {
    /// Create an empty registry resolving files through `loader`.
    pub fn new(loader: Arc<dyn ContentLoader>) -> Self {
        Self {
            entries: Vec::new(),
            loader,
            timeout: None,
        }
    }

    /// Fail a whole resolve when its loads take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Append an entry to the table.
    pub fn register(&mut self, entry: RegistryEntry) {
        if self.contains(&entry.name) {
            tracing::warn!(
                "Component {} registered twice, the first entry is kept for lookup",
                entry.name
            );
        }
        self.entries.push(entry);
    }

    /// Register every entry of a JSON manifest (an array of entries).
    pub fn load_manifest(&mut self, path: &Path) -> Result<usize, RegistryError> {
        let source = fs::read_to_string(path)
            .map_err(|e| RegistryError::Manifest(format!("{}: {}", path.display(), e)))?;
        let entries: Vec<RegistryEntry> = serde_json::from_str(&source)
            .map_err(|e| RegistryError::Manifest(format!("{}: {}", path.display(), e)))?;

        let count = entries.len();
        for entry in entries {
            self.register(entry);
        }

        tracing::info!("Registered {} components from {}", count, path.display());
        Ok(count)
    }

    /// Look up an entry by exact name.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Load every file of a component.
    ///
    /// Loads run concurrently; the result follows the entry's file order. Any
    /// failed load fails the whole call and no partial result is returned.
    pub async fn resolve(&self, name: &str) -> Result<Vec<ComponentFile>, RegistryError> {
        let entry = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent(name.to_string()))?;

        tracing::debug!("Resolving {} ({} files)", entry.name, entry.files.len());

        let loader = self.loader.as_ref();
        let loads = entry.files.iter().map(|file| async move {
            match loader.load(&entry.name, file).await {
                Ok(content) => Ok(ComponentFile {
                    name: file.clone(),
                    content,
                }),
                Err(source) => Err(RegistryError::FileLoadFailure {
                    component: entry.name.clone(),
                    file: file.clone(),
                    source,
                }),
            }
        });
        let all = try_join_all(loads);

        let files = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, all).await.map_err(|_| {
                RegistryError::LoadTimeout {
                    component: entry.name.clone(),
                    timeout,
                }
            })??,
            None => all.await?,
        };

        Ok(files)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("entries", &self.entries)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
