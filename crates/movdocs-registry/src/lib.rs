//! Component registry for the animation library.
//!
//! Entries are registered once at startup and resolved by exact name into
//! the contents of their files, loaded through a pluggable content loader.

pub mod entry;
pub mod loader;
pub mod registry;

pub use entry::{ComponentFile, EntryKind, RegistryEntry};
pub use loader::{ContentLoader, FsLoader, LoadError, MemoryLoader};
pub use registry::{ComponentRegistry, RegistryError};
