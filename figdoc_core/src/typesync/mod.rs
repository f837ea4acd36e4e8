//! TypeSync - TypeScript declarations from documentation tables

pub mod collect;
pub mod config;
pub mod naming;
pub mod typescript;

pub use collect::collect_types;
pub use naming::{Replacements, nested_type_name, normalize_entity_name, to_camel_case};
pub use typescript::{ExportSet, GeneratedBlock, TypeWriter};
