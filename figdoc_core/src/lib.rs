// figdoc - TypeScript declarations from a design-file format's documentation tables

pub mod bindings;
pub mod config;
pub mod document;
pub mod error;
pub mod log;
pub mod types;

// TypeSync - extraction and TypeScript generation
pub mod typesync;

// Re-export commonly used items for convenience
pub use bindings::{GeneratedBindings, generate_bindings};
pub use document::{DocumentNode, HtmlDocument, Role, SchemaDocument};
pub use error::{FigdocError, Result};
pub use types::{EntityBody, FieldMap, TypeDescriptor};
