//! TypeScript declaration generation from a [`TypeDescriptor`].
//!
//! Entities become `type` aliases, `interface`s or `enum`s. Fields whose type
//! is an inline union are lifted into their own declaration (an enum for
//! quoted literals, a type alias for references) which is placed ahead of
//! the declaration using it.

use super::collect::collect_types;
use super::naming::{Replacements, nested_type_name, normalize_entity_name, to_camel_case, unquote};
use crate::document::DocumentNode;
use crate::error::Result;
use crate::types::{EntityBody, TypeDescriptor};
use indexmap::IndexSet;
use tracing::{debug, trace};

/// Names declared during one generation call, in declaration order.
pub type ExportSet = IndexSet<String>;

/// Output of one [`TypeWriter::parse_types_to_ts`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    /// Declarations, followed by the export list unless exports were blocked.
    pub text: String,
    /// The names to import that this block did not declare itself.
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TypeWriter {
    replacements: Replacements,
}

impl TypeWriter {
    pub fn new(replacements: Replacements) -> Self {
        Self { replacements }
    }

    /// Renders a parent reference for an `extends` clause. A union of parents
    /// becomes a list, since interfaces cannot extend a union.
    fn extends_clause(&self, parents: &str) -> String {
        self.replacements
            .apply(parents)
            .split('|')
            .map(str::trim)
            .filter(|parent| !parent.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn write_type(
        &self,
        alias: &str,
        content: &EntityBody,
        parent_type: Option<&str>,
        to_export: &mut ExportSet,
    ) -> String {
        to_export.insert(alias.to_string());

        let map = match (content, content.alias_expression()) {
            (EntityBody::Fields(map), None) => map,
            (_, expression) => {
                return format!(
                    "type {} = {};",
                    alias,
                    to_camel_case(&self.replacements.apply(expression.unwrap_or_default()))
                );
            }
        };

        let parent = map
            .extends
            .as_deref()
            .map(|parents| self.extends_clause(parents))
            .or_else(|| parent_type.map(str::to_string));

        let mut result = match parent {
            Some(parent) => format!("interface {} extends {} {{\n", alias, parent),
            None => format!("interface {} {{\n", alias),
        };

        for (name, property) in &map.fields {
            if !property.contains('|') {
                result.push_str(&format!("\t{}: {};\n", name, self.replacements.apply(property)));
                continue;
            }

            let type_name = nested_type_name(alias, name);
            trace!(owner = alias, field = %name, nested = %type_name, "Lifting inline union");

            let rendered = if property.starts_with('\'') {
                self.write_enum(&type_name, property, to_export)
            } else {
                self.write_type(
                    &type_name,
                    &EntityBody::Alias(property.clone()),
                    None,
                    to_export,
                )
            };

            result = format!("{}\n\n{}", rendered, result);
            result.push_str(&format!("\t{}: {};\n", name, type_name));
        }

        result.push('}');
        result
    }

    pub fn write_enum(&self, name: &str, values: &str, to_export: &mut ExportSet) -> String {
        let values: IndexSet<&str> = values.split('|').map(str::trim).collect();

        to_export.insert(name.to_string());

        let last = values.len().saturating_sub(1);
        let members: String = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                format!(
                    "\t{} = {}{}\n",
                    to_camel_case(unquote(value)),
                    value,
                    if index == last { "" } else { "," }
                )
            })
            .collect();

        format!("enum {} {{\n{}}}", name, members)
    }

    /// Generates every entity of `types` in order.
    ///
    /// Entity names are normalized and, under a `parent_type`, suffixed with
    /// it. Declared names are removed from `types_to_import`; what is left is
    /// returned in [`GeneratedBlock::unresolved`].
    pub fn parse_types_to_ts(
        &self,
        types: &TypeDescriptor,
        parent_type: Option<&str>,
        block_exports: bool,
        types_to_import: &[String],
    ) -> GeneratedBlock {
        debug!(
            entities = types.len(),
            parent = parent_type,
            block_exports,
            "Generating TypeScript declarations"
        );

        let mut to_export = ExportSet::new();
        let mut unresolved = types_to_import.to_vec();
        let mut result = String::new();

        for (raw_name, body) in types {
            if !result.is_empty() {
                result.push_str("\n\n");
            }

            let mut name = normalize_entity_name(raw_name);
            if let Some(parent) = parent_type {
                name.push_str(parent);
            }

            if let Some(position) = unresolved.iter().position(|n| *n == name) {
                trace!(name = %name, "Resolved import locally");
                unresolved.remove(position);
            }

            let rendered = match body {
                EntityBody::Alias(values) if body.is_literal_union() => {
                    self.write_enum(&name, values, &mut to_export)
                }
                _ => self.write_type(&name, body, parent_type, &mut to_export),
            };
            result.push_str(&rendered);
        }

        if !block_exports {
            result.push_str("\n\nexport {\n");
            if let Some(parent) = parent_type {
                result.push_str(&format!("\t{},\n", parent));
            }
            for name in &to_export {
                result.push_str(&format!("\t{},\n", name));
            }
            result.push_str("};");
        }

        debug!(
            declared = to_export.len(),
            unresolved = unresolved.len(),
            "Generated TypeScript declarations"
        );

        GeneratedBlock {
            text: result,
            unresolved,
        }
    }

    /// Collects `table` and generates it, see [`Self::parse_types_to_ts`].
    pub fn parse_table_to_ts<N: DocumentNode>(
        &self,
        table: N,
        parent_type: Option<&str>,
        block_exports: bool,
        types_to_import: &[String],
    ) -> Result<GeneratedBlock> {
        let types = collect_types(table)?;
        Ok(self.parse_types_to_ts(&types, parent_type, block_exports, types_to_import))
    }
}
