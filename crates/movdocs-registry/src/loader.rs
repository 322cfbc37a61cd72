//! Content loaders addressed by `(component, file)`.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;

/// Error from a single file load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No content for {component}/{file}")]
    Missing { component: String, file: String },
}

/// Loads the content of one component file.
#[async_trait]
pub trait ContentLoader: Send + Sync {
    async fn load(&self, component: &str, file: &str) -> Result<String, LoadError>;
}

/// Reads `<root>/<component>/<file>` from disk.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, component: &str, file: &str) -> PathBuf {
        self.root.join(component).join(file)
    }
}

#[async_trait]
impl ContentLoader for FsLoader {
    async fn load(&self, component: &str, file: &str) -> Result<String, LoadError> {
        let path = self.path(component, file);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}

/// In-memory file contents, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<(String, String), String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(
        mut self,
        component: impl Into<String>,
        file: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files
            .insert((component.into(), file.into()), content.into());
        self
    }
}

#[async_trait]
impl ContentLoader for MemoryLoader {
    async fn load(&self, component: &str, file: &str) -> Result<String, LoadError> {
        self.files
            .get(&(component.to_string(), file.to_string()))
            .cloned()
            .ok_or_else(|| LoadError::Missing {
                component: component.to_string(),
                file: file.to_string(),
            })
    }
}
