//! Playground catalog.
//!
//! Scans a directory of YAML playground definitions, validates them, and
//! provides lookup by slug.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::control::ControlDescriptor;
use crate::state::{Playground, PlaygroundError};

/// A playground as declared on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundDef {
    /// Title, also the source of the generated tag name
    pub title: String,

    /// URL slug override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub controls: Vec<ControlDescriptor>,

    /// Hand-written snippet shown instead of the generated one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Preview template rendered against the current values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl PlaygroundDef {
    /// Parse a definition from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// Slug from the override, or the title lowercased and hyphenated.
    pub fn slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => self
                .title
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join("-"),
        }
    }

    /// Build a fresh playground from this definition.
    pub fn instantiate(&self) -> Result<Playground, PlaygroundError> {
        let playground = Playground::new(self.title.clone(), self.controls.clone())?;
        Ok(match &self.code {
            Some(code) => playground.with_code(code.clone()),
            None => playground,
        })
    }
}

/// A definition together with the file it came from.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub def: PlaygroundDef,
    pub source_path: PathBuf,
}

/// Playground definitions keyed by slug.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a directory for `.yaml`/`.yml` definitions and add them.
    ///
    /// Files that fail to parse or validate are skipped. Returns how many
    /// definitions were added.
    pub fn scan(&mut self, dir: &Path) -> Result<usize, CatalogError> {
        if !dir.exists() {
            return Err(CatalogError::DirectoryNotFound(dir.display().to_string()));
        }

        let mut count = 0;

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !path.is_file() || (ext != "yaml" && ext != "yml") {
                continue;
            }

            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let def = match PlaygroundDef::from_yaml(&source) {
                Ok(def) => def,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            if let Err(e) = def.instantiate() {
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }

            if self.insert(def, path.to_path_buf()) {
                count += 1;
            }
        }

        Ok(count)
    }

    /// Add a definition. The first definition of a slug wins.
    pub fn insert(&mut self, def: PlaygroundDef, source_path: PathBuf) -> bool {
        let slug = def.slug();
        if let Some(existing) = self.entries.get(&slug) {
            tracing::warn!(
                "Duplicate playground '{}' in {}, keeping {}",
                slug,
                source_path.display(),
                existing.source_path.display()
            );
            return false;
        }

        tracing::debug!("Loaded playground '{}' from {}", slug, source_path.display());
        self.entries.insert(slug, CatalogEntry { def, source_path });
        true
    }

    pub fn get(&self, slug: &str) -> Option<&PlaygroundDef> {
        self.entries.get(slug).map(|e| &e.def)
    }

    /// All slugs in sorted order.
    pub fn slugs(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(slug, entry)| (slug.as_str(), entry))
    }

    /// Definitions in slug order.
    pub fn definitions(&self) -> impl Iterator<Item = &PlaygroundDef> {
        self.entries.values().map(|e| &e.def)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Playgrounds directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Invalid playground definition: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlValue;
    use std::fs;
    use tempfile::tempdir;

    const FADE_IN: &str = r#"
title: Fade In
description: Create smooth opacity transitions
controls:
  - name: duration
    label: Duration (seconds)
    type: range
    defaultValue: 1
    min: 0.1
    max: 3
    step: 0.1
  - name: ease
    label: Easing Function
    type: select
    defaultValue: easeOut
    options:
      - { value: linear, label: Linear }
      - { value: easeOut, label: Ease Out }
preview: "<div style=\"opacity: {{ duration }}\"></div>"
"#;

    #[test]
    fn derives_slug_from_title() {
        let def = PlaygroundDef::from_yaml(FADE_IN).unwrap();
        assert_eq!(def.slug(), "fade-in");

        let custom = PlaygroundDef {
            slug: Some("fade".to_string()),
            ..def
        };
        assert_eq!(custom.slug(), "fade");
    }

    #[test]
    fn instantiates_playground_from_definition() {
        let def = PlaygroundDef::from_yaml(FADE_IN).unwrap();
        let playground = def.instantiate().unwrap();

        assert_eq!(playground.title(), "Fade In");
        assert_eq!(
            playground.value("ease"),
            Some(&ControlValue::from("easeOut"))
        );
    }

    #[test]
    fn scans_definitions_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("playgrounds");
        fs::create_dir_all(dir.join("nested")).unwrap();

        fs::write(dir.join("fade-in.yaml"), FADE_IN).unwrap();
        fs::write(
            dir.join("nested").join("rotate.yml"),
            "title: Rotate\ncontrols:\n  - { name: repeat, label: Loop, type: boolean, defaultValue: false }\n",
        )
        .unwrap();
        fs::write(dir.join("notes.md"), "# not a playground").unwrap();

        let mut catalog = Catalog::new();
        let count = catalog.scan(&dir).unwrap();

        assert_eq!(count, 2);
        assert_eq!(catalog.slugs(), vec!["fade-in", "rotate"]);
        assert!(catalog.get("rotate").unwrap().preview.is_none());
    }

    #[test]
    fn skips_invalid_definitions() {
        let temp = tempdir().unwrap();
        let dir = temp.path();

        fs::write(dir.join("broken.yaml"), "title: [unclosed").unwrap();
        fs::write(
            dir.join("dupes.yaml"),
            "title: Dupes\ncontrols:\n  - { name: a, label: A, type: number, defaultValue: 1 }\n  - { name: a, label: A, type: number, defaultValue: 2 }\n",
        )
        .unwrap();

        let mut catalog = Catalog::new();
        let count = catalog.scan(dir).unwrap();

        assert_eq!(count, 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn first_definition_of_a_slug_wins() {
        let mut catalog = Catalog::new();
        let first = PlaygroundDef::from_yaml("title: Scale\ndescription: first\n").unwrap();
        let second = PlaygroundDef::from_yaml("title: Scale\ndescription: second\n").unwrap();

        assert!(catalog.insert(first, PathBuf::from("a.yaml")));
        assert!(!catalog.insert(second, PathBuf::from("b.yaml")));

        assert_eq!(
            catalog.get("scale").unwrap().description.as_deref(),
            Some("first")
        );
    }

    #[test]
    fn errors_on_missing_directory() {
        let mut catalog = Catalog::new();
        let result = catalog.scan(Path::new("/definitely/not/here"));

        assert!(matches!(result, Err(CatalogError::DirectoryNotFound(_))));
    }
}
