//! Playground server implementation.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path as UrlPath, State,
    },
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast::error::RecvError, RwLock};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use movdocs_playground::{Catalog, ControlInput, ControlValue, PlaygroundError};
use movdocs_registry::{ComponentFile, ComponentRegistry, RegistryError};

use crate::events::{EventHub, PlaygroundEvent};
use crate::session::{Session, SessionSnapshot};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the playground server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory containing playground definitions
    pub playgrounds_dir: PathBuf,

    /// Static assets served at `/`
    pub assets_dir: Option<PathBuf>,

    /// Extra paths whose changes trigger a client reload
    pub watch_paths: Vec<PathBuf>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Reload definitions when they change on disk
    pub watch: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            playgrounds_dir: PathBuf::from("playgrounds"),
            assets_dir: None,
            watch_paths: Vec::new(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
            watch: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid playground {0}")]
    Playground(String),

    #[error("Invalid preview template for {0}")]
    Template(String),
}

/// Shared server state.
struct ServerState {
    config: ServerConfig,
    sessions: BTreeMap<String, Session>,
    registry: Arc<ComponentRegistry>,
    events: EventHub,
}

type SharedState = Arc<RwLock<ServerState>>;

/// Playground server.
pub struct PlaygroundServer {
    config: ServerConfig,
    registry: Arc<ComponentRegistry>,
}

impl PlaygroundServer {
    pub fn new(config: ServerConfig, registry: ComponentRegistry) -> Self {
        Self {
            config,
            registry: Arc::new(registry),
        }
    }

    /// Start the playground server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let sessions = load_sessions(&self.config.playgrounds_dir)?;
        tracing::info!("Loaded {} playgrounds", sessions.len());

        let state = Arc::new(RwLock::new(ServerState {
            config: self.config.clone(),
            sessions,
            registry: self.registry,
            events: EventHub::new(),
        }));

        if self.config.watch {
            let mut watch_paths = vec![self.config.playgrounds_dir.clone()];
            watch_paths.extend(self.config.watch_paths.iter().cloned());

            let (watcher, mut rx) = FileWatcher::new(&watch_paths)
                .map_err(|e| ServerError::WatchError(e.to_string()))?;

            let state_clone = Arc::clone(&state);
            tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    handle_watch_event(&state_clone, event).await;
                }
                // Keep watcher alive
                drop(watcher);
            });
        }

        let app = router(state, self.config.assets_dir.as_deref());

        tracing::info!("Starting playground server at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Scan a directory and build one session per playground.
pub fn load_sessions(dir: &Path) -> Result<BTreeMap<String, Session>, ServerError> {
    Ok(build_sessions(&scan_catalog(dir)?))
}

fn scan_catalog(dir: &Path) -> Result<Catalog, ServerError> {
    let mut catalog = Catalog::new();
    catalog
        .scan(dir)
        .map_err(|e| ServerError::Catalog(e.to_string()))?;
    Ok(catalog)
}

/// Build sessions for every catalog entry, skipping ones whose preview
/// template does not compile.
pub fn build_sessions(catalog: &Catalog) -> BTreeMap<String, Session> {
    rebuild_sessions(catalog, BTreeMap::new())
}

/// Like [`build_sessions`], but sessions in `previous` whose definition is
/// unchanged are carried over with their values and remount token.
pub fn rebuild_sessions(
    catalog: &Catalog,
    mut previous: BTreeMap<String, Session>,
) -> BTreeMap<String, Session> {
    let mut sessions = BTreeMap::new();

    for (slug, entry) in catalog.entries() {
        if let Some(session) = previous
            .remove(slug)
            .filter(|session| session.definition() == &entry.def)
        {
            sessions.insert(slug.to_string(), session);
            continue;
        }

        match Session::from_def(&entry.def) {
            Ok(session) => {
                sessions.insert(slug.to_string(), session);
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", entry.source_path.display(), e);
            }
        }
    }

    sessions
}

fn router(state: SharedState, assets_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/playgrounds", get(list_playgrounds))
        .route("/api/playgrounds/{slug}", get(get_playground))
        .route("/api/playgrounds/{slug}/input", post(post_input))
        .route("/api/playgrounds/{slug}/values", post(post_value))
        .route("/api/playgrounds/{slug}/reset", post(post_reset))
        .route("/api/playgrounds/{slug}/replay", post(post_replay))
        .route("/api/playgrounds/{slug}/code", get(get_code))
        .route("/api/registry/{name}", get(get_component))
        .route("/__events", get(ws_handler));

    let app = match assets_dir {
        Some(dir) => api.with_state(state).fallback_service(ServeDir::new(dir)),
        None => api.route("/", get(index_handler)).with_state(state),
    };

    app.layer(CorsLayer::permissive())
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    match event {
        WatchEvent::DefinitionChanged(path) => {
            tracing::info!("Playground definition changed: {}", path.display());

            let mut state = state.write().await;
            match scan_catalog(&state.config.playgrounds_dir) {
                Ok(catalog) => {
                    let previous = std::mem::take(&mut state.sessions);
                    state.sessions = rebuild_sessions(&catalog, previous);
                    tracing::info!("Reloaded {} playgrounds", state.sessions.len());
                }
                Err(e) => {
                    tracing::warn!("Failed to reload playgrounds: {}", e);
                    return;
                }
            }
            state.events.send(PlaygroundEvent::Reload);
        }

        WatchEvent::RegistryChanged(path) => {
            tracing::info!("Registry source changed: {}", path.display());
            state.read().await.events.send(PlaygroundEvent::Reload);
        }
    }
}

/// Errors returned by API handlers.
#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Unprocessable(String),
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m),
            ApiError::BadGateway(m) => (StatusCode::BAD_GATEWAY, m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<PlaygroundError> for ApiError {
    fn from(e: PlaygroundError) -> Self {
        ApiError::Unprocessable(e.to_string())
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::UnknownComponent(_) => ApiError::NotFound(e.to_string()),
            RegistryError::FileLoadFailure { .. } | RegistryError::LoadTimeout { .. } => {
                ApiError::BadGateway(e.to_string())
            }
            RegistryError::Manifest(_) => ApiError::Internal(e.to_string()),
        }
    }
}

fn unknown_playground(slug: &str) -> ApiError {
    ApiError::NotFound(format!("Playground {} not found", slug))
}

#[derive(Debug, Serialize)]
struct PlaygroundSummary {
    slug: String,
    title: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InputRequest {
    control: String,
    input: ControlInput,
}

#[derive(Debug, Deserialize)]
struct ValueRequest {
    name: String,
    value: ControlValue,
}

async fn list_playgrounds(State(state): State<SharedState>) -> Json<Vec<PlaygroundSummary>> {
    let state = state.read().await;

    let summaries = state
        .sessions
        .values()
        .map(|session| PlaygroundSummary {
            slug: session.slug().to_string(),
            title: session.playground().title().to_string(),
            description: session.description().map(str::to_string),
        })
        .collect();

    Json(summaries)
}

async fn get_playground(
    State(state): State<SharedState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut state = state.write().await;
    let session = state
        .sessions
        .get_mut(&slug)
        .ok_or_else(|| unknown_playground(&slug))?;

    Ok(Json(session.snapshot()))
}

async fn post_input(
    State(state): State<SharedState>,
    UrlPath(slug): UrlPath<String>,
    Json(request): Json<InputRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut state = state.write().await;
    let state = &mut *state;
    let session = state
        .sessions
        .get_mut(&slug)
        .ok_or_else(|| unknown_playground(&slug))?;

    let changed = session
        .playground_mut()
        .handle_input(&request.control, &request.input)?;

    if changed {
        let value = session
            .playground()
            .value(&request.control)
            .cloned()
            .unwrap_or_default();
        state.events.send(PlaygroundEvent::Updated {
            slug: slug.clone(),
            control: request.control,
            value,
        });
    }

    Ok(Json(session.snapshot()))
}

async fn post_value(
    State(state): State<SharedState>,
    UrlPath(slug): UrlPath<String>,
    Json(request): Json<ValueRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut state = state.write().await;
    let state = &mut *state;
    let session = state
        .sessions
        .get_mut(&slug)
        .ok_or_else(|| unknown_playground(&slug))?;

    session
        .playground_mut()
        .set_value(&request.name, request.value.clone())?;

    state.events.send(PlaygroundEvent::Updated {
        slug: slug.clone(),
        control: request.name,
        value: request.value,
    });

    Ok(Json(session.snapshot()))
}

async fn post_reset(
    State(state): State<SharedState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    remount(state, slug, |session| session.playground_mut().reset()).await
}

async fn post_replay(
    State(state): State<SharedState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    remount(state, slug, |session| session.playground_mut().replay()).await
}

/// Apply an action that bumps the remount token and tell clients about it.
async fn remount(
    state: SharedState,
    slug: String,
    action: impl FnOnce(&mut Session),
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut state = state.write().await;
    let state = &mut *state;
    let session = state
        .sessions
        .get_mut(&slug)
        .ok_or_else(|| unknown_playground(&slug))?;

    action(session);

    state.events.send(PlaygroundEvent::Remount {
        slug: slug.clone(),
        token: session.playground().remount().get(),
    });

    Ok(Json(session.snapshot()))
}

async fn get_code(
    State(state): State<SharedState>,
    UrlPath(slug): UrlPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state.read().await;
    let session = state
        .sessions
        .get(&slug)
        .ok_or_else(|| unknown_playground(&slug))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        session.playground().code(),
    ))
}

async fn get_component(
    State(state): State<SharedState>,
    UrlPath(name): UrlPath<String>,
) -> Result<Json<Vec<ComponentFile>>, ApiError> {
    // Release the lock before awaiting file loads
    let registry = Arc::clone(&state.read().await.registry);

    let files = registry.resolve(&name).await.map_err(|e| {
        tracing::warn!("Failed to resolve {}: {}", name, e);
        ApiError::from(e)
    })?;

    Ok(Json(files))
}

/// Handler for the index page.
async fn index_handler(State(state): State<SharedState>) -> Html<String> {
    let state = state.read().await;

    let items: String = state
        .sessions
        .values()
        .map(|session| {
            format!(
                r#"<li><a href="/api/playgrounds/{}">{}</a></li>"#,
                session.slug(),
                session.playground().title()
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>movdocs playgrounds</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 800px; margin: 2rem auto; padding: 0 1rem; }}
  </style>
</head>
<body>
  <h1>Playgrounds</h1>
  <ul>{}</ul>
</body>
</html>"#,
        items
    ))
}

/// Handler for the event WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = state.read().await.events.subscribe();

    if send_event(&mut socket, &PlaygroundEvent::Connected)
        .await
        .is_err()
    {
        return;
    }

    // Forward events to the client
    loop {
        match rx.recv().await {
            Ok(event) => {
                if send_event(&mut socket, &event).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!("Event client lagged, skipped {} events", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &PlaygroundEvent) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode event: {}", e);
            return Ok(());
        }
    };
    socket.send(Message::Text(json.into())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use movdocs_registry::{EntryKind, MemoryLoader, RegistryEntry};
    use std::fs;
    use tempfile::tempdir;

    const FADE_IN: &str = r#"
title: Fade In
description: Customize the fade in animation parameters
controls:
  - { name: duration, label: Duration, type: range, defaultValue: 0.5, min: 0.1, max: 3, step: 0.1 }
  - { name: delay, label: Delay, type: number, defaultValue: 0 }
"#;

    const ROTATE: &str = r#"
title: Rotate
controls:
  - { name: rotation, label: Rotation, type: range, defaultValue: 360, min: 0, max: 720 }
"#;

    fn test_state() -> (tempfile::TempDir, SharedState) {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("fade-in.yaml"), FADE_IN).unwrap();
        fs::write(temp.path().join("rotate.yml"), ROTATE).unwrap();

        let mut registry = ComponentRegistry::new(Arc::new(
            MemoryLoader::new().with_file("fade-in", "fade-in.tsx", "export {}"),
        ));
        registry.register(RegistryEntry::new(
            "fade-in",
            EntryKind::Ui,
            vec!["fade-in.tsx".to_string()],
        ));
        registry.register(RegistryEntry::new(
            "rotate",
            EntryKind::Ui,
            vec!["rotate.tsx".to_string()],
        ));

        let config = ServerConfig {
            playgrounds_dir: temp.path().to_path_buf(),
            open: false,
            watch: false,
            ..Default::default()
        };

        let state = Arc::new(RwLock::new(ServerState {
            sessions: load_sessions(&config.playgrounds_dir).unwrap(),
            config,
            registry: Arc::new(registry),
            events: EventHub::new(),
        }));

        (temp, state)
    }

    fn status<T>(result: Result<T, ApiError>) -> StatusCode {
        match result {
            Ok(_) => StatusCode::OK,
            Err(e) => e.into_response().status(),
        }
    }

    #[test]
    fn creates_server_with_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 7777);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn lists_playgrounds_in_slug_order() {
        let (_temp, state) = test_state();

        let Json(list) = list_playgrounds(State(state)).await;

        let slugs: Vec<_> = list.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["fade-in", "rotate"]);
        assert_eq!(
            list[0].description.as_deref(),
            Some("Customize the fade in animation parameters")
        );
    }

    #[tokio::test]
    async fn unknown_playground_is_not_found() {
        let (_temp, state) = test_state();

        let result = get_playground(State(state), UrlPath("bounce".to_string())).await;

        assert_eq!(status(result), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn input_updates_values_and_broadcasts() {
        let (_temp, state) = test_state();
        let mut rx = state.read().await.events.subscribe();

        let request = InputRequest {
            control: "duration".to_string(),
            input: ControlInput::Text("2.5".to_string()),
        };
        let Json(snapshot) = post_input(
            State(Arc::clone(&state)),
            UrlPath("fade-in".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(
            snapshot.values.get("duration"),
            Some(&ControlValue::Number(2.5))
        );
        assert_eq!(snapshot.remount.get(), 0);
        assert!(matches!(
            rx.try_recv(),
            Ok(PlaygroundEvent::Updated { control, .. }) if control == "duration"
        ));
    }

    #[tokio::test]
    async fn absorbed_input_sends_no_event() {
        let (_temp, state) = test_state();
        let mut rx = state.read().await.events.subscribe();

        let request = InputRequest {
            control: "delay".to_string(),
            input: ControlInput::Text("soon".to_string()),
        };
        let Json(snapshot) = post_input(
            State(Arc::clone(&state)),
            UrlPath("fade-in".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(snapshot.values.get("delay"), Some(&ControlValue::Number(0.0)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unknown_control_is_unprocessable() {
        let (_temp, state) = test_state();

        let request = ValueRequest {
            name: "easing".to_string(),
            value: ControlValue::Text("linear".to_string()),
        };
        let result = post_value(State(state), UrlPath("fade-in".to_string()), Json(request)).await;

        assert_eq!(status(result), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_remounts() {
        let (_temp, state) = test_state();

        let request = ValueRequest {
            name: "rotation".to_string(),
            value: ControlValue::Number(90.0),
        };
        post_value(
            State(Arc::clone(&state)),
            UrlPath("rotate".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        let mut rx = state.read().await.events.subscribe();
        let Json(snapshot) = post_reset(State(Arc::clone(&state)), UrlPath("rotate".to_string()))
            .await
            .unwrap();

        assert_eq!(
            snapshot.values.get("rotation"),
            Some(&ControlValue::Number(360.0))
        );
        assert_eq!(snapshot.remount.get(), 1);
        assert!(snapshot.preview.fresh);
        assert_eq!(
            rx.try_recv().ok(),
            Some(PlaygroundEvent::Remount {
                slug: "rotate".to_string(),
                token: 1,
            })
        );
    }

    #[tokio::test]
    async fn replay_keeps_values() {
        let (_temp, state) = test_state();

        let request = ValueRequest {
            name: "rotation".to_string(),
            value: ControlValue::Number(90.0),
        };
        post_value(
            State(Arc::clone(&state)),
            UrlPath("rotate".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        let Json(snapshot) = post_replay(State(Arc::clone(&state)), UrlPath("rotate".to_string()))
            .await
            .unwrap();

        assert_eq!(
            snapshot.values.get("rotation"),
            Some(&ControlValue::Number(90.0))
        );
        assert_eq!(snapshot.remount.get(), 1);
    }

    #[tokio::test]
    async fn serves_generated_code() {
        let (_temp, state) = test_state();

        let response = get_code(State(state), UrlPath("rotate".to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn maps_registry_errors_to_statuses() {
        let (_temp, state) = test_state();

        let found = get_component(State(Arc::clone(&state)), UrlPath("fade-in".to_string())).await;
        let missing = get_component(State(Arc::clone(&state)), UrlPath("stagger".to_string())).await;
        let broken = get_component(State(Arc::clone(&state)), UrlPath("rotate".to_string())).await;

        let Json(files) = found.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content, "export {}");
        assert_eq!(status(missing), StatusCode::NOT_FOUND);
        assert_eq!(status(broken), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn definition_change_reloads_sessions() {
        let (temp, state) = test_state();
        let mut rx = state.read().await.events.subscribe();

        fs::write(
            temp.path().join("scale.yaml"),
            "title: Scale\ncontrols:\n  - { name: bounce, label: Bounce Effect, type: boolean, defaultValue: false }\n",
        )
        .unwrap();
        handle_watch_event(
            &state,
            WatchEvent::DefinitionChanged(temp.path().join("scale.yaml")),
        )
        .await;

        assert!(state.read().await.sessions.contains_key("scale"));
        assert_eq!(rx.try_recv().ok(), Some(PlaygroundEvent::Reload));
    }

    #[tokio::test]
    async fn reload_keeps_untouched_sessions() {
        let (temp, state) = test_state();

        for slug in ["fade-in", "rotate"] {
            post_replay(State(Arc::clone(&state)), UrlPath(slug.to_string()))
                .await
                .unwrap();
        }
        let request = ValueRequest {
            name: "duration".to_string(),
            value: ControlValue::Number(2.5),
        };
        post_value(
            State(Arc::clone(&state)),
            UrlPath("fade-in".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        let edited = ROTATE.replace("defaultValue: 360", "defaultValue: 180");
        fs::write(temp.path().join("rotate.yml"), edited).unwrap();
        handle_watch_event(
            &state,
            WatchEvent::DefinitionChanged(temp.path().join("rotate.yml")),
        )
        .await;

        let mut state = state.write().await;
        let fade_in = state.sessions.get_mut("fade-in").unwrap().snapshot();
        assert_eq!(
            fade_in.values.get("duration"),
            Some(&ControlValue::Number(2.5))
        );
        assert_eq!(fade_in.remount.get(), 1);

        let rotate = state.sessions.get_mut("rotate").unwrap().snapshot();
        assert_eq!(
            rotate.values.get("rotation"),
            Some(&ControlValue::Number(180.0))
        );
        assert_eq!(rotate.remount.get(), 0);
    }

    #[test]
    fn missing_playgrounds_dir_is_an_error() {
        let temp = tempdir().unwrap();

        let result = load_sessions(&temp.path().join("nowhere"));

        assert!(matches!(result, Err(ServerError::Catalog(_))));
    }
}
