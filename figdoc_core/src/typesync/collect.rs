//! Extraction of a [`TypeDescriptor`] from one documentation table.

use crate::document::{DocumentNode, Role};
use crate::error::{FigdocError, Result};
use crate::types::{EntityBody, FieldMap, TypeDescriptor};
use tracing::{debug, trace, warn};

const DEPRECATED_MARKER: &str = "[DEPRECATED] ";

/// Quote each literal, drop the deprecation marker, join as a union.
fn literal_union<N: DocumentNode>(literals: &[N]) -> String {
    literals
        .iter()
        .map(|literal| format!("'{}'", literal.text().replacen(DEPRECATED_MARKER, "", 1)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn reference_union<N: DocumentNode>(links: &[N]) -> String {
    links
        .iter()
        .map(|link| link.text())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn record_extends(types: &mut TypeDescriptor, name: &str, parents: String) {
    match types.get_mut(name) {
        Some(EntityBody::Fields(map)) => map.extends = Some(parents),
        Some(body) => *body = EntityBody::Extends(parents),
        None => {
            types.insert(name.to_string(), EntityBody::Extends(parents));
        }
    }
}

fn record_alias(types: &mut TypeDescriptor, name: &str, literals: String) {
    match types.get_mut(name) {
        Some(EntityBody::Fields(_)) => {
            warn!(entity = name, "Ignoring literal set on an entity that already has fields");
        }
        Some(body) => *body = EntityBody::Alias(literals),
        None => {
            types.insert(name.to_string(), EntityBody::Alias(literals));
        }
    }
}

fn record_field(types: &mut TypeDescriptor, name: &str, field: String, expression: String) {
    let body = types
        .entry(name.to_string())
        .or_insert_with(|| EntityBody::Fields(FieldMap::default()));

    match body {
        EntityBody::Fields(_) => {}
        EntityBody::Extends(parents) => {
            let parents = std::mem::take(parents);
            *body = EntityBody::Fields(FieldMap::with_extends(parents));
        }
        EntityBody::Alias(alias) => {
            warn!(
                entity = name,
                alias = %alias,
                field = %field,
                "Ignoring field on an entity declared as a literal set"
            );
            return;
        }
    }

    if let EntityBody::Fields(map) = body {
        map.insert(field, expression);
    }
}

/// Walks every body row of `table` and builds its type description.
///
/// A literal set and named fields never merge: whichever the entity got
/// first is kept and the other is dropped with a warning. Fields arriving
/// after a supertype-only cell keep that supertype as `extends`.
///
/// A row without an entity-name element, or a named field without a type
/// element next to its name, fails with [`FigdocError::MissingElement`].
pub fn collect_types<N: DocumentNode>(table: N) -> Result<TypeDescriptor> {
    let mut types = TypeDescriptor::new();
    let rows = table.select_all(Role::Row);
    debug!(rows = rows.len(), "Collecting types from table");

    for (index, row) in rows.iter().enumerate() {
        let name = row
            .select_first(Role::EntityName)
            .ok_or_else(|| FigdocError::missing_element(Role::EntityName, format!("row {}", index)))?
            .text();

        for property in row.select_all(Role::PropertyField) {
            let Some(name_node) = property.select_first(Role::FieldName) else {
                let links = property.select_all(Role::ReferenceLink);
                if !links.is_empty() {
                    record_extends(&mut types, &name, reference_union(&links));
                    continue;
                }

                let literals = property.select_all(Role::Literal);
                if !literals.is_empty() {
                    record_alias(&mut types, &name, literal_union(&literals));
                }
                continue;
            };

            let field = name_node.text();
            let literals = property.select_all(Role::Literal);
            let expression = if literals.is_empty() {
                name_node
                    .next_element_sibling()
                    .ok_or_else(|| {
                        FigdocError::missing_element(Role::FieldName, format!("{}.{}", name, field))
                    })?
                    .text()
                    .replace('"', "'")
            } else {
                literal_union(&literals)
            };

            trace!(entity = %name, field = %field, expression = %expression, "Collected field");
            record_field(&mut types, &name, field, expression);
        }
    }

    debug!(entities = types.len(), "Collected types");
    Ok(types)
}
