//! Playground server command.

use anyhow::Result;
use movdocs_server::{PlaygroundServer, ServerConfig};

use crate::config::ConfigFile;

/// Run the playground server.
pub async fn run(config: ConfigFile, port: Option<u16>, open: bool) -> Result<()> {
    let registry = config.registry()?;

    let server_config = ServerConfig {
        playgrounds_dir: config.playgrounds_dir(),
        assets_dir: config.assets_dir(),
        watch_paths: vec![config.manifest_path(), config.components_dir()],
        port: port.unwrap_or(config.server.port),
        host: config.server.host,
        open: open && config.server.open,
        watch: config.server.watch,
    };

    tracing::info!("Starting playground server on port {}", server_config.port);

    PlaygroundServer::new(server_config, registry).start().await?;

    Ok(())
}
