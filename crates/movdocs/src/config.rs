//! Configuration file (movdocs.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use movdocs_playground::Catalog;
use movdocs_registry::{ComponentRegistry, FsLoader};

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub playgrounds: PlaygroundsConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub server: ServerSettings,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct PlaygroundsConfig {
    #[serde(default = "default_playgrounds_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Root holding one directory per component
    #[serde(default = "default_components_dir")]
    pub components: String,
    /// Abort a resolve after this many milliseconds
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_true")]
    pub open: bool,
    #[serde(default = "default_true")]
    pub watch: bool,
    /// Static assets served at `/`
    pub assets: Option<String>,
}

impl Default for PlaygroundsConfig {
    fn default() -> Self {
        Self {
            dir: default_playgrounds_dir(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            components: default_components_dir(),
            timeout_ms: None,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: true,
            watch: true,
            assets: None,
        }
    }
}

fn default_playgrounds_dir() -> String {
    "playgrounds".to_string()
}
fn default_manifest() -> String {
    "registry.json".to_string()
}
fn default_components_dir() -> String {
    "src/components".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7777
}
fn default_true() -> bool {
    true
}

/// Directory holding the config file; relative config paths start here.
pub fn config_root(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let mut config = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        config
    } else {
        ConfigFile::default()
    };

    config.root = config_root(path).to_path_buf();
    Ok(config)
}

impl ConfigFile {
    pub fn playgrounds_dir(&self) -> PathBuf {
        self.root.join(&self.playgrounds.dir)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.registry.manifest)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join(&self.registry.components)
    }

    pub fn assets_dir(&self) -> Option<PathBuf> {
        self.server.assets.as_ref().map(|dir| self.root.join(dir))
    }

    /// Scan the playgrounds directory.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        catalog
            .scan(&self.playgrounds_dir())
            .context("Failed to load playgrounds")?;
        Ok(catalog)
    }

    /// Build the component registry from the manifest, if there is one.
    pub fn registry(&self) -> Result<ComponentRegistry> {
        let loader = FsLoader::new(self.components_dir());
        let mut registry = ComponentRegistry::new(Arc::new(loader));

        if let Some(ms) = self.registry.timeout_ms {
            registry = registry.with_timeout(Duration::from_millis(ms));
        }

        let manifest = self.manifest_path();
        if manifest.exists() {
            let count = registry
                .load_manifest(&manifest)
                .context("Failed to load registry manifest")?;
            tracing::debug!("Loaded {} registry entries", count);
        } else {
            tracing::warn!("Registry manifest not found: {}", manifest.display());
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("movdocs.toml")).unwrap();

        assert_eq!(config.playgrounds.dir, "playgrounds");
        assert_eq!(config.registry.manifest, "registry.json");
        assert_eq!(config.registry.timeout_ms, None);
        assert_eq!(config.server.port, 7777);
        assert!(config.server.open);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("movdocs.toml");
        fs::write(&path, "[server]\nport = 4000\nopen = false\n\n[registry]\ntimeout_ms = 500\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.server.port, 4000);
        assert!(!config.server.open);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.registry.timeout_ms, Some(500));
        assert_eq!(config.registry.components, "src/components");
    }

    #[test]
    fn relative_paths_follow_the_config_file() {
        let temp = tempdir().unwrap();
        let site = temp.path().join("site");
        fs::create_dir_all(&site).unwrap();
        let path = site.join("movdocs.toml");
        fs::write(&path, "[server]\nassets = \"dist\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.playgrounds_dir(), site.join("playgrounds"));
        assert_eq!(config.manifest_path(), site.join("registry.json"));
        assert_eq!(config.components_dir(), site.join("src/components"));
        assert_eq!(config.assets_dir(), Some(site.join("dist")));
    }

    #[test]
    fn bare_file_name_resolves_from_current_dir() {
        let config = load_config(Path::new("movdocs-missing.toml")).unwrap();

        assert_eq!(config.playgrounds_dir(), PathBuf::from("playgrounds"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("movdocs.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
