//! List playgrounds.

use anyhow::Result;

use crate::config::ConfigFile;

/// Run the list command.
pub fn run(config: &ConfigFile) -> Result<()> {
    let catalog = config.catalog()?;

    if catalog.is_empty() {
        tracing::warn!(
            "No playgrounds found in {}. Run 'movdocs init' to create samples.",
            config.playgrounds_dir().display()
        );
        return Ok(());
    }

    for def in catalog.definitions() {
        let controls: Vec<_> = def.controls.iter().map(|c| c.name.as_str()).collect();
        println!("{:<16} {:<16} {}", def.slug(), def.title, controls.join(", "));
        if let Some(description) = &def.description {
            println!("{:<16} {}", "", description);
        }
    }

    Ok(())
}
