//! Control descriptors and the values they produce.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single tunable parameter of a playground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    /// Unique key within a playground
    pub name: String,

    /// Display text shown next to the widget
    pub label: String,

    /// Control type with its type-specific constraints
    #[serde(flatten)]
    pub kind: ControlKind,
}

/// The closed set of control types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlKind {
    /// Free numeric text field
    Number(NumericControl),
    /// Slider with a numeric readout
    Range(NumericControl),
    /// Closed choice from a list of options
    Select(SelectControl),
    /// Single toggle
    Boolean(BooleanControl),
    /// Color picker paired with a hex text field
    Color(ColorControl),
}

/// Constraints shared by `number` and `range` controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericControl {
    #[serde(rename = "defaultValue", alias = "default")]
    pub default: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectControl {
    #[serde(rename = "defaultValue", alias = "default")]
    pub default: ControlValue,

    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanControl {
    #[serde(rename = "defaultValue", alias = "default")]
    pub default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorControl {
    #[serde(rename = "defaultValue", alias = "default")]
    pub default: String,
}

/// One entry of a `select` control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: ControlValue,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<ControlValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A current or default control value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    /// Absent value; skipped when generating code
    #[default]
    Unset,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ControlValue {
    /// Get as a number if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ControlValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as a boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ControlValue::Unset)
    }
}

impl fmt::Display for ControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Unset => Ok(()),
            ControlValue::Bool(b) => write!(f, "{b}"),
            ControlValue::Number(n) => write!(f, "{n}"),
            ControlValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ControlValue {
    fn from(value: f64) -> Self {
        ControlValue::Number(value)
    }
}

impl From<bool> for ControlValue {
    fn from(value: bool) -> Self {
        ControlValue::Bool(value)
    }
}

impl From<&str> for ControlValue {
    fn from(value: &str) -> Self {
        ControlValue::Text(value.to_string())
    }
}

impl From<String> for ControlValue {
    fn from(value: String) -> Self {
        ControlValue::Text(value)
    }
}

impl ControlDescriptor {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }

    /// Create a `number` control without bounds.
    pub fn number(name: impl Into<String>, label: impl Into<String>, default: f64) -> Self {
        Self::new(
            name,
            label,
            ControlKind::Number(NumericControl {
                default,
                min: None,
                max: None,
                step: None,
            }),
        )
    }

    /// Create a `range` control without bounds.
    pub fn range(name: impl Into<String>, label: impl Into<String>, default: f64) -> Self {
        Self::new(
            name,
            label,
            ControlKind::Range(NumericControl {
                default,
                min: None,
                max: None,
                step: None,
            }),
        )
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<ControlValue>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(
            name,
            label,
            ControlKind::Select(SelectControl {
                default: default.into(),
                options,
            }),
        )
    }

    pub fn boolean(name: impl Into<String>, label: impl Into<String>, default: bool) -> Self {
        Self::new(name, label, ControlKind::Boolean(BooleanControl { default }))
    }

    pub fn color(
        name: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            label,
            ControlKind::Color(ColorControl {
                default: default.into(),
            }),
        )
    }

    /// Set `min`/`max`. No effect on non-numeric controls.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        if let ControlKind::Number(n) | ControlKind::Range(n) = &mut self.kind {
            n.min = Some(min);
            n.max = Some(max);
        }
        self
    }

    /// Set `step`. No effect on non-numeric controls.
    pub fn with_step(mut self, step: f64) -> Self {
        if let ControlKind::Number(n) | ControlKind::Range(n) = &mut self.kind {
            n.step = Some(step);
        }
        self
    }

    /// The declared default as a control value.
    pub fn default_value(&self) -> ControlValue {
        match &self.kind {
            ControlKind::Number(n) | ControlKind::Range(n) => ControlValue::Number(n.default),
            ControlKind::Select(s) => s.default.clone(),
            ControlKind::Boolean(b) => ControlValue::Bool(b.default),
            ControlKind::Color(c) => ControlValue::Text(c.default.clone()),
        }
    }

    /// Type tag as written in definitions.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ControlKind::Number(_) => "number",
            ControlKind::Range(_) => "range",
            ControlKind::Select(_) => "select",
            ControlKind::Boolean(_) => "boolean",
            ControlKind::Color(_) => "color",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_range_descriptor() {
        let yaml = r#"
name: duration
label: Duration (seconds)
type: range
defaultValue: 1
min: 0.1
max: 3
step: 0.1
"#;
        let control: ControlDescriptor = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(control.name, "duration");
        assert_eq!(control.type_name(), "range");
        assert_eq!(control.default_value(), ControlValue::Number(1.0));
        match control.kind {
            ControlKind::Range(n) => {
                assert_eq!(n.min, Some(0.1));
                assert_eq!(n.max, Some(3.0));
                assert_eq!(n.step, Some(0.1));
            }
            other => panic!("expected range, got {:?}", other),
        }
    }

    #[test]
    fn deserializes_select_with_options() {
        let yaml = r#"
name: ease
label: Easing Function
type: select
default: easeOut
options:
  - { value: linear, label: Linear }
  - { value: easeOut, label: Ease Out }
"#;
        let control: ControlDescriptor = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(control.default_value(), ControlValue::from("easeOut"));
        let ControlKind::Select(select) = control.kind else {
            panic!("expected select");
        };
        assert_eq!(select.options.len(), 2);
        assert_eq!(select.options[0].value, ControlValue::from("linear"));
    }

    #[test]
    fn rejects_unknown_control_type() {
        let yaml = "name: x\nlabel: X\ntype: slider\ndefaultValue: 1\n";
        let result: Result<ControlDescriptor, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }

    #[test]
    fn untagged_values_keep_their_type() {
        let values: Vec<ControlValue> =
            serde_json::from_str(r#"[null, true, 2.5, 3, "left"]"#).unwrap();

        assert_eq!(
            values,
            vec![
                ControlValue::Unset,
                ControlValue::Bool(true),
                ControlValue::Number(2.5),
                ControlValue::Number(3.0),
                ControlValue::from("left"),
            ]
        );
    }

    #[test]
    fn displays_numbers_naturally() {
        assert_eq!(ControlValue::Number(1.0).to_string(), "1");
        assert_eq!(ControlValue::Number(2.5).to_string(), "2.5");
        assert_eq!(ControlValue::Number(-720.0).to_string(), "-720");
        assert_eq!(ControlValue::Unset.to_string(), "");
    }

    #[test]
    fn bounds_only_apply_to_numeric_controls() {
        let color = ControlDescriptor::color("tint", "Tint", "#ff0000").with_bounds(0.0, 1.0);
        assert!(matches!(color.kind, ControlKind::Color(_)));

        let range = ControlDescriptor::range("d", "D", 1.0)
            .with_bounds(0.1, 3.0)
            .with_step(0.1);
        let ControlKind::Range(n) = range.kind else {
            panic!("expected range");
        };
        assert_eq!((n.min, n.max, n.step), (Some(0.1), Some(3.0), Some(0.1)));
    }
}
