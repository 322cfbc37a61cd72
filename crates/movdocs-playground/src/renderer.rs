//! Maps control descriptors to input widgets.
//!
//! Rendering is pure: a descriptor and its current value produce a widget
//! description, and the widget interprets raw input into the value it would
//! emit. Input that cannot be interpreted is absorbed (`None`) and must leave
//! the state untouched. Numbers are never clamped to `min`/`max`.

use serde::{Deserialize, Serialize};

use crate::control::{ControlDescriptor, ControlKind, ControlValue, SelectOption};

/// Fallback step for `number` controls.
pub const NUMBER_STEP: f64 = 0.1;

/// Fallback bounds and step for `range` controls.
pub const RANGE_MIN: f64 = 0.0;
pub const RANGE_MAX: f64 = 100.0;
pub const RANGE_STEP: f64 = 1.0;

/// Caption shown next to boolean toggles.
pub const TOGGLE_CAPTION: &str = "Enable";

/// A rendered control: the descriptor's identity plus its widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedControl {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub widget: Widget,
}

/// Concrete input widget for a control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    /// Free numeric text field
    NumberField {
        value: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
        step: f64,
    },

    /// Slider with a textual readout of the current value
    Slider {
        value: Option<f64>,
        min: f64,
        max: f64,
        step: f64,
        readout: String,
    },

    /// Closed choice list
    Choice {
        selected: ControlValue,
        options: Vec<SelectOption>,
    },

    /// Checkbox toggle
    Toggle { checked: bool, caption: String },

    /// Color picker and hex text field bound to the same value
    ColorPair { value: String },
}

/// Raw input coming from a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ControlInput {
    /// Typed text: number field, slider position, or hex field
    Text(String),
    /// Option picked from a choice list, by its value
    Choose(String),
    /// Toggle state
    Toggle(bool),
    /// Color picker output
    Pick(String),
}

/// Render a control with its current value.
pub fn render_control(control: &ControlDescriptor, current: &ControlValue) -> RenderedControl {
    let widget = match &control.kind {
        ControlKind::Number(n) => Widget::NumberField {
            value: current.as_f64(),
            min: n.min,
            max: n.max,
            step: n.step.unwrap_or(NUMBER_STEP),
        },
        ControlKind::Range(n) => Widget::Slider {
            value: current.as_f64(),
            min: n.min.unwrap_or(RANGE_MIN),
            max: n.max.unwrap_or(RANGE_MAX),
            step: n.step.unwrap_or(RANGE_STEP),
            readout: current.to_string(),
        },
        ControlKind::Select(s) => Widget::Choice {
            selected: current.clone(),
            options: s.options.clone(),
        },
        ControlKind::Boolean(_) => Widget::Toggle {
            checked: current.as_bool().unwrap_or(false),
            caption: TOGGLE_CAPTION.to_string(),
        },
        ControlKind::Color(_) => Widget::ColorPair {
            value: current.to_string(),
        },
    };

    RenderedControl {
        name: control.name.clone(),
        label: control.label.clone(),
        widget,
    }
}

impl Widget {
    /// Interpret raw input into the value this widget emits.
    pub fn interpret(&self, input: &ControlInput) -> Option<ControlValue> {
        match (self, input) {
            (Widget::NumberField { .. } | Widget::Slider { .. }, ControlInput::Text(raw)) => {
                parse_float(raw).map(ControlValue::Number)
            }
            (Widget::Choice { options, .. }, ControlInput::Choose(raw)) => options
                .iter()
                .find(|option| option.value.to_string() == *raw)
                .map(|option| option.value.clone()),
            (Widget::Toggle { .. }, ControlInput::Toggle(checked)) => {
                Some(ControlValue::Bool(*checked))
            }
            (Widget::ColorPair { .. }, ControlInput::Text(raw) | ControlInput::Pick(raw)) => {
                Some(ControlValue::Text(raw.clone()))
            }
            _ => None,
        }
    }
}

/// Parse numeric widget text. Rejects anything that is not a finite float.
fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
