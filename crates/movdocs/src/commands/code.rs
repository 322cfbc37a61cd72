//! Print the usage snippet of a playground.

use anyhow::{bail, Context, Result};

use movdocs_playground::{ControlInput, ControlKind, ControlValue, Playground};

use crate::config::ConfigFile;

/// Run the code command.
pub fn run(config: &ConfigFile, slug: &str, set: &[String], input: &[String]) -> Result<()> {
    let catalog = config.catalog()?;
    let def = catalog
        .get(slug)
        .with_context(|| format!("Playground {} not found", slug))?;

    let mut playground = def.instantiate()?;
    apply(&mut playground, set, input)?;

    println!("{}", playground.code());

    Ok(())
}

/// Apply `--set` assignments, then `--input` assignments.
fn apply(playground: &mut Playground, set: &[String], input: &[String]) -> Result<()> {
    for raw in set {
        let (name, value) = split_assignment(raw)?;
        playground.set_value(name, parse_value(value))?;
    }

    for raw in input {
        let (name, value) = split_assignment(raw)?;
        let control_input = widget_input(playground, name, value)?;
        if !playground.handle_input(name, &control_input)? {
            tracing::warn!("Input '{}' for {} was ignored", value, name);
        }
    }

    Ok(())
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => bail!("Expected NAME=VALUE, got '{}'", raw),
    }
}

/// Interpret a command-line value: booleans, then finite numbers, then text.
fn parse_value(raw: &str) -> ControlValue {
    match raw {
        "true" => ControlValue::Bool(true),
        "false" => ControlValue::Bool(false),
        _ => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => ControlValue::Number(n),
            _ => ControlValue::Text(raw.to_string()),
        },
    }
}

/// Build the input the control's widget would produce for `raw`.
fn widget_input(playground: &Playground, name: &str, raw: &str) -> Result<ControlInput> {
    let control = playground
        .controls()
        .iter()
        .find(|c| c.name == name)
        .with_context(|| format!("Control not declared in this playground: {}", name))?;

    let input = match &control.kind {
        ControlKind::Number(_) | ControlKind::Range(_) => ControlInput::Text(raw.to_string()),
        ControlKind::Select(_) => ControlInput::Choose(raw.to_string()),
        ControlKind::Boolean(_) => ControlInput::Toggle(
            raw.parse::<bool>()
                .with_context(|| format!("Expected true or false for {}", name))?,
        ),
        ControlKind::Color(_) => ControlInput::Pick(raw.to_string()),
    };

    Ok(input)
}
