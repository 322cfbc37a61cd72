//! Server-side playground sessions.

use std::fmt::Write;

use minijinja::value::{Value, ValueKind};
use minijinja::{escape_formatter, Environment, Error, Output, State};
use serde::Serialize;

use movdocs_playground::{
    Playground, PlaygroundDef, PreviewHost, RemountToken, RenderedControl, ValueMap,
};

use crate::server::ServerError;

const PREVIEW_TEMPLATE: &str = "preview";

/// A live playground plus the host of its preview.
pub struct Session {
    slug: String,
    def: PlaygroundDef,
    description: Option<String>,
    playground: Playground,
    preview: PreviewHost<String>,
}

/// Serializable view of a session after rendering its preview.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub widgets: Vec<RenderedControl>,
    pub values: ValueMap,
    pub remount: RemountToken,
    pub preview: PreviewSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewSnapshot {
    /// Sequence number of the mounted preview
    pub mount: u64,
    /// Whether this render mounted a new preview
    pub fresh: bool,
    pub html: String,
}

impl Session {
    /// Build a session from a catalog definition.
    pub fn from_def(def: &PlaygroundDef) -> Result<Self, ServerError> {
        let slug = def.slug();
        let playground = def
            .instantiate()
            .map_err(|e| ServerError::Playground(format!("{}: {}", slug, e)))?;

        let preview = match &def.preview {
            Some(template) => template_preview(&slug, template)?,
            None => attribute_preview(slug.clone()),
        };

        Ok(Self {
            slug,
            def: def.clone(),
            description: def.description.clone(),
            playground,
            preview,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Definition this session was built from.
    pub fn definition(&self) -> &PlaygroundDef {
        &self.def
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    pub fn playground_mut(&mut self) -> &mut Playground {
        &mut self.playground
    }

    /// Render the preview for the current state and capture everything a
    /// client needs.
    pub fn snapshot(&mut self) -> SessionSnapshot {
        let frame = self
            .preview
            .render(self.playground.values(), self.playground.remount());
        let preview = PreviewSnapshot {
            mount: frame.mount,
            fresh: frame.fresh,
            html: frame.content.clone(),
        };

        SessionSnapshot {
            slug: self.slug.clone(),
            title: self.playground.title().to_string(),
            description: self.description.clone(),
            widgets: self.playground.widgets(),
            values: self.playground.values().clone(),
            remount: self.playground.remount(),
            preview,
        }
    }
}

/// Preview rendered from a minijinja template with the values as context.
fn template_preview(slug: &str, source: &str) -> Result<PreviewHost<String>, ServerError> {
    let mut env = Environment::new();
    env.set_formatter(format_value);
    env.add_template_owned(PREVIEW_TEMPLATE.to_string(), source.to_string())
        .map_err(|e| ServerError::Template(format!("{}: {}", slug, e)))?;

    let slug = slug.to_string();
    Ok(PreviewHost::new(move |values: &ValueMap| {
        let rendered = env
            .get_template(PREVIEW_TEMPLATE)
            .and_then(|template| template.render(values));
        match rendered {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to render preview for {}: {}", slug, e);
                format!(
                    "<pre class=\"preview-error\">{}</pre>",
                    html_escape(&e.to_string())
                )
            }
        }
    }))
}

/// Print values the way `ControlValue` displays them: `true`/`false` and
/// numbers without a trailing `.0`.
fn format_value(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    match value.kind() {
        ValueKind::Bool => write!(out, "{}", value.is_true()).map_err(Error::from),
        ValueKind::Number => match f64::try_from(value.clone()) {
            Ok(n) => write!(out, "{}", n).map_err(Error::from),
            Err(_) => escape_formatter(out, state, value),
        },
        _ => escape_formatter(out, state, value),
    }
}

/// Fallback preview exposing every value as a data attribute.
fn attribute_preview(slug: String) -> PreviewHost<String> {
    PreviewHost::new(move |values: &ValueMap| {
        let attrs: String = values
            .iter()
            .filter(|(_, value)| !value.is_unset())
            .map(|(name, value)| {
                format!(r#" data-{}="{}""#, name, html_escape(&value.to_string()))
            })
            .collect();
        format!(r#"<div data-playground="{}"{}></div>"#, slug, attrs)
    })
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
