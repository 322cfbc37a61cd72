//! Playground engine for animation component documentation.
//!
//! Binds a declarative set of typed control descriptors to live state,
//! maps each control to an input widget, drives a remountable preview and
//! derives a usage snippet from the current values.

pub mod catalog;
pub mod codegen;
pub mod control;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod values;

pub use catalog::{Catalog, CatalogEntry, CatalogError, PlaygroundDef};
pub use codegen::generate_code;
pub use control::{ControlDescriptor, ControlKind, ControlValue, SelectOption};
pub use preview::{PreviewFrame, PreviewHost};
pub use renderer::{render_control, ControlInput, RenderedControl, Widget};
pub use state::{Playground, PlaygroundError};
pub use values::{RemountToken, ValueMap};
