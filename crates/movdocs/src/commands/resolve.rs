//! Resolve a registry component.

use anyhow::{Context, Result};

use crate::config::ConfigFile;

/// Run the resolve command.
pub async fn run(config: &ConfigFile, component: &str) -> Result<()> {
    let registry = config.registry()?;

    let files = registry
        .resolve(component)
        .await
        .with_context(|| format!("Failed to resolve {}", component))?;

    tracing::info!("Resolved {} files for {}", files.len(), component);

    for file in files {
        println!("// {}", file.name);
        println!("{}", file.content);
    }

    Ok(())
}
