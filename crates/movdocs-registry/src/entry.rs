//! Registry entry and resolved file types.

use serde::{Deserialize, Serialize};

/// Kind of registered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "components:ui")]
    Ui,
    #[serde(rename = "components:example")]
    Example,
    #[serde(rename = "components:block")]
    Block,
}

/// A named component and the files that make it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Other registry entries this one builds on
    #[serde(default)]
    pub registry_dependencies: Vec<String>,

    /// Package dependencies
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub dev_dependencies: Vec<String>,

    /// File identifiers, in the order they are returned
    pub files: Vec<String>,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            registry_dependencies: Vec::new(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            files,
        }
    }
}

/// A resolved file of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentFile {
    pub name: String,
    pub content: String,
}
