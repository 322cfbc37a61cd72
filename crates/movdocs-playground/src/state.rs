//! Playground state controller.

use std::collections::HashSet;

use crate::codegen::generate_code;
use crate::control::{ControlDescriptor, ControlKind, ControlValue};
use crate::renderer::{render_control, ControlInput, RenderedControl};
use crate::values::{RemountToken, ValueMap};

/// Errors raised by a playground.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaygroundError {
    #[error("Control not declared in this playground: {0}")]
    InvalidControlReference(String),

    #[error("Control declared more than once: {0}")]
    DuplicateControl(String),

    #[error("Select control has no options: {0}")]
    MissingOptions(String),
}

/// One playground instance: its controls, their live values and the
/// preview generation.
#[derive(Debug, Clone)]
pub struct Playground {
    title: String,
    controls: Vec<ControlDescriptor>,
    defaults: ValueMap,
    values: ValueMap,
    remount: RemountToken,
    code: Option<String>,
}

impl Playground {
    /// Create a playground with every control at its default.
    pub fn new(
        title: impl Into<String>,
        controls: Vec<ControlDescriptor>,
    ) -> Result<Self, PlaygroundError> {
        validate(&controls)?;

        let defaults = ValueMap::from_defaults(&controls);

        Ok(Self {
            title: title.into(),
            values: defaults.clone(),
            defaults,
            controls,
            remount: RemountToken::default(),
            code: None,
        })
    }

    /// Use a hand-written snippet instead of a derived one.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&ControlValue> {
        self.values.get(name)
    }

    pub fn remount(&self) -> RemountToken {
        self.remount
    }

    /// Replace the value of one declared control. The remount token is left alone.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<ControlValue>,
    ) -> Result<(), PlaygroundError> {
        let value = value.into();
        tracing::debug!(control = name, %value, "set value");

        if self.values.replace(name, value) {
            Ok(())
        } else {
            Err(PlaygroundError::InvalidControlReference(name.to_string()))
        }
    }

    /// Feed raw widget input through the control's renderer.
    ///
    /// Returns `Ok(false)` when the input was absorbed and nothing changed.
    pub fn handle_input(
        &mut self,
        name: &str,
        input: &ControlInput,
    ) -> Result<bool, PlaygroundError> {
        let rendered = self
            .render(name)
            .ok_or_else(|| PlaygroundError::InvalidControlReference(name.to_string()))?;

        match rendered.widget.interpret(input) {
            Some(value) => {
                self.set_value(name, value)?;
                Ok(true)
            }
            None => {
                tracing::debug!(control = name, ?input, "input absorbed");
                Ok(false)
            }
        }
    }

    /// Restore every default and start a new preview generation.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.remount = self.remount.next();
        tracing::debug!(remount = self.remount.get(), "reset");
    }

    /// Start a new preview generation with the current values.
    pub fn replay(&mut self) {
        self.remount = self.remount.next();
        tracing::debug!(remount = self.remount.get(), "replay");
    }

    /// Widgets for every control, in declaration order.
    pub fn widgets(&self) -> Vec<RenderedControl> {
        self.controls
            .iter()
            .map(|control| {
                let current = self.values.get(&control.name).cloned().unwrap_or_default();
                render_control(control, &current)
            })
            .collect()
    }

    /// Usage snippet for the current values.
    pub fn code(&self) -> String {
        generate_code(&self.title, &self.values, self.code.as_deref())
    }

    fn render(&self, name: &str) -> Option<RenderedControl> {
        let control = self.controls.iter().find(|c| c.name == name)?;
        let current = self.values.get(name)?;
        Some(render_control(control, current))
    }
}

fn validate(controls: &[ControlDescriptor]) -> Result<(), PlaygroundError> {
    let mut seen = HashSet::new();

    for control in controls {
        if !seen.insert(control.name.as_str()) {
            return Err(PlaygroundError::DuplicateControl(control.name.clone()));
        }
        if let ControlKind::Select(select) = &control.kind {
            if select.options.is_empty() {
                return Err(PlaygroundError::MissingOptions(control.name.clone()));
            }
        }
    }

    Ok(())
}
