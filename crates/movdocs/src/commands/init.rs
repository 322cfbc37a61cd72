//! Initialize playgrounds in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::config_root;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing movdocs...");

    let written = scaffold(config_path, yes)?;

    tracing::info!("Initialization complete! Wrote {} files.", written);
    tracing::info!("Run 'movdocs serve' to start the playground server.");

    Ok(())
}

/// Write the config, sample playgrounds and an empty registry next to
/// `config_path`. Existing files are kept unless `overwrite` is set.
fn scaffold(config_path: &Path, overwrite: bool) -> Result<usize> {
    let root = config_root(config_path);

    let playgrounds_dir = root.join("playgrounds");
    if !playgrounds_dir.exists() {
        fs::create_dir_all(&playgrounds_dir)
            .context("Failed to create playgrounds directory")?;
    }

    let mut written = 0;

    if write_file(config_path, DEFAULT_CONFIG, overwrite)? {
        written += 1;
    }

    if write_file(&root.join("registry.json"), "[]\n", overwrite)? {
        written += 1;
    }

    for (name, source) in SAMPLES {
        let path = playgrounds_dir.join(format!("{}.yaml", name));
        if write_file(&path, source, overwrite)? {
            written += 1;
        }
    }

    Ok(written)
}

fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<bool> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(false);
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# movdocs configuration

[playgrounds]
# Directory containing playground definitions
dir = "playgrounds"

[registry]
# Component manifest
manifest = "registry.json"

# Directory holding one folder per component
components = "src/components"

# Give up on a resolve after this many milliseconds
# timeout_ms = 5000

[server]
host = "127.0.0.1"
port = 7777
open = true
watch = true

# Static frontend served at /
# assets = "dist"
"#;

const SAMPLES: [(&str, &str); 5] = [
    ("fade-in", FADE_IN),
    ("slide-in", SLIDE_IN),
    ("scale", SCALE),
    ("rotate", ROTATE),
    ("stagger", STAGGER),
];

const FADE_IN: &str = r#"title: Fade In
description: Adjust the controls to see how different settings affect the animation
controls:
  - name: duration
    label: Duration (seconds)
    type: range
    defaultValue: 1
    min: 0.1
    max: 3
    step: 0.1
  - name: delay
    label: Delay (seconds)
    type: range
    defaultValue: 0
    min: 0
    max: 2
    step: 0.1
  - name: initialOpacity
    label: Initial Opacity
    type: range
    defaultValue: 0
    min: 0
    max: 1
    step: 0.1
  - name: ease
    label: Easing Function
    type: select
    defaultValue: easeOut
    options:
      - { value: linear, label: Linear }
      - { value: easeIn, label: Ease In }
      - { value: easeOut, label: Ease Out }
      - { value: easeInOut, label: Ease In Out }
      - { value: circIn, label: Circ In }
      - { value: circOut, label: Circ Out }
      - { value: backIn, label: Back In }
      - { value: backOut, label: Back Out }
preview: |
  <div class="fade-in" style="opacity: {{ initialOpacity }}; transition: opacity {{ duration }}s {{ ease }} {{ delay }}s">
    <h3>Fade In Content</h3>
  </div>
"#;

const SLIDE_IN: &str = r#"title: Slide In
description: Configure the slide animation direction and properties
controls:
  - name: direction
    label: Direction
    type: select
    defaultValue: left
    options:
      - { value: left, label: From Left }
      - { value: right, label: From Right }
      - { value: top, label: From Top }
      - { value: bottom, label: From Bottom }
  - name: distance
    label: Distance (px)
    type: range
    defaultValue: 100
    min: 20
    max: 300
    step: 10
  - name: duration
    label: Duration (seconds)
    type: range
    defaultValue: 0.5
    min: 0.1
    max: 2
    step: 0.1
  - name: delay
    label: Delay (seconds)
    type: range
    defaultValue: 0
    min: 0
    max: 1
    step: 0.1
  - name: fadeIn
    label: Combine with Fade
    type: boolean
    defaultValue: true
preview: |
  <div class="slide-in" data-direction="{{ direction }}" data-distance="{{ distance }}" data-fade="{{ fadeIn }}"
       style="transition: transform {{ duration }}s ease-out {{ delay }}s">
    <h3>Sliding Content</h3>
  </div>
"#;

const SCALE: &str = r#"title: Scale
description: Adjust scale values to create zoom effects
controls:
  - name: initialScale
    label: Initial Scale
    type: range
    defaultValue: 0
    min: 0
    max: 2
    step: 0.1
  - name: finalScale
    label: Final Scale
    type: range
    defaultValue: 1
    min: 0.5
    max: 2
    step: 0.1
  - name: duration
    label: Duration (seconds)
    type: range
    defaultValue: 0.5
    min: 0.1
    max: 2
    step: 0.1
  - name: bounce
    label: Bounce Effect
    type: boolean
    defaultValue: false
preview: |
  <div class="scale" data-from="{{ initialScale }}" data-to="{{ finalScale }}"
       data-type="{% if bounce %}spring{% else %}tween{% endif %}" style="transition-duration: {{ duration }}s">
    <h3>Scaling Content</h3>
  </div>
"#;

const ROTATE: &str = r#"title: Rotate
description: Control rotation angle and speed
controls:
  - name: rotation
    label: Rotation (degrees)
    type: range
    defaultValue: 360
    min: -720
    max: 720
    step: 15
  - name: duration
    label: Duration (seconds)
    type: range
    defaultValue: 1
    min: 0.2
    max: 3
    step: 0.1
  - name: repeat
    label: Loop Animation
    type: boolean
    defaultValue: false
preview: |
  <div class="rotate" style="transform: rotate({{ rotation }}deg); transition: transform {{ duration }}s linear"
       data-repeat="{{ repeat }}">
    <h3>Rotating</h3>
  </div>
"#;

const STAGGER: &str = r#"title: Stagger
description: Control the timing between sequential animations
controls:
  - name: staggerDelay
    label: Stagger Delay (seconds)
    type: range
    defaultValue: 0.1
    min: 0
    max: 0.5
    step: 0.05
  - name: itemDuration
    label: Item Duration (seconds)
    type: range
    defaultValue: 0.5
    min: 0.1
    max: 2
    step: 0.1
  - name: itemCount
    label: Number of Items
    type: range
    defaultValue: 5
    min: 3
    max: 10
    step: 1
preview: |
  <ul class="stagger">
  {%- for i in range(itemCount | int) %}
    <li style="transition: opacity {{ itemDuration }}s {{ i * staggerDelay }}s">Item {{ i + 1 }}</li>
  {%- endfor %}
  </ul>
"#;
