//! Usage snippet generator.

use crate::control::ControlValue;
use crate::values::ValueMap;

/// Placeholder child emitted between the opening and closing tags.
const CONTENT_PLACEHOLDER: &str = "<YourContent />";

/// Generate a usage snippet for the current values.
///
/// An explicit template wins and is returned verbatim. Otherwise the tag
/// name is the title without whitespace and every value becomes one prop
/// line: strings as `key="value"`, `true` as a bare `key`, numbers as
/// `key={value}`. `false` and unset values are left out.
pub fn generate_code(title: &str, values: &ValueMap, template: Option<&str>) -> String {
    if let Some(template) = template {
        return template.to_string();
    }

    let tag = tag_name(title);

    let props: Vec<String> = values
        .iter()
        .filter_map(|(key, value)| format_prop(key, value))
        .map(|prop| format!("  {}\n", prop))
        .collect();

    format!(
        "<{tag}\n{props}>\n  {content}\n</{tag}>",
        tag = tag,
        props = props.concat(),
        content = CONTENT_PLACEHOLDER,
    )
}

/// Derive the component tag from a title: "Fade In" -> "FadeIn".
fn tag_name(title: &str) -> String {
    title.split_whitespace().collect()
}

fn format_prop(key: &str, value: &ControlValue) -> Option<String> {
    match value {
        ControlValue::Unset => None,
        ControlValue::Bool(true) => Some(key.to_string()),
        ControlValue::Bool(false) => None,
        ControlValue::Text(s) => Some(format!(r#"{}="{}""#, key, s)),
        ControlValue::Number(n) => Some(format!("{}={{{}}}", key, n)),
    }
}
