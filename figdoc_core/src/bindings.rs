//! Generation of the `properties` and `node` modules from one documentation
//! page.

use crate::config::{FigdocConfig, TablesConfig};
use crate::document::SchemaDocument;
use crate::error::Result;
use crate::figdoc_log;
use crate::types::TypeDescriptor;
use crate::typesync::{Replacements, TypeWriter, collect_types, normalize_entity_name};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The three documentation tables a page is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Properties,
    GlobalProperties,
    NodeTypes,
}

impl TableKind {
    pub fn identifier(self, tables: &TablesConfig) -> &str {
        match self {
            TableKind::Properties => &tables.properties,
            TableKind::GlobalProperties => &tables.global_properties,
            TableKind::NodeTypes => &tables.node_types,
        }
    }
}

/// Collects one table of `document` without generating anything.
pub fn collect_table<D: SchemaDocument>(
    document: &D,
    tables: &TablesConfig,
    kind: TableKind,
) -> Result<TypeDescriptor> {
    let identifier = kind.identifier(tables);
    debug!(table = identifier, ?kind, "Collecting table");
    collect_types(document.table(identifier)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBindings {
    /// Property types with their own export list.
    pub properties: String,
    /// Import of the property types, then global properties and node types.
    pub node: String,
    /// Names the node module imports from the properties module.
    pub unresolved_imports: Vec<String>,
}

pub fn generate_bindings<D: SchemaDocument>(
    document: &D,
    config: &FigdocConfig,
) -> Result<GeneratedBindings> {
    let tables = &config.source.tables;
    let typesync = &config.typesync;
    let writer = TypeWriter::new(Replacements::new(typesync.replacements.clone()));

    info!("Generating property types");
    let properties = collect_table(document, tables, TableKind::Properties)?;
    figdoc_log!(format!("{:#?}", properties), "collect.log", true);
    let properties_block = writer.parse_types_to_ts(&properties, None, false, &[]);

    let mut imports: Vec<String> = properties.keys().map(|name| normalize_entity_name(name)).collect();
    imports.extend(typesync.extra_imports.iter().cloned());
    debug!(imports = imports.len(), "Built import list from property types");

    info!("Generating global properties");
    let global = writer.parse_table_to_ts(
        document.table(TableKind::GlobalProperties.identifier(tables))?,
        None,
        true,
        &imports,
    )?;

    info!(parent = %typesync.parent_type, "Generating node types");
    let nodes = writer.parse_table_to_ts(
        document.table(TableKind::NodeTypes.identifier(tables))?,
        Some(typesync.parent_type.as_str()),
        false,
        &global.unresolved,
    )?;

    let node = format!(
        "import {{ {} }} from '{}';\n\n{}\n\n{}",
        nodes.unresolved.join(", "),
        typesync.import_path,
        global.text,
        nodes.text
    );
    figdoc_log!(format!("{}\n\n{}", properties_block.text, node), "generated.log");

    info!(
        properties_bytes = properties_block.text.len(),
        node_bytes = node.len(),
        imports = nodes.unresolved.len(),
        "Generation complete"
    );

    Ok(GeneratedBindings {
        properties: properties_block.text,
        node,
        unresolved_imports: nodes.unresolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FigdocError;
    use crate::document::HtmlDocument;
    use pretty_assertions::assert_eq;

    fn page(properties: &str, global: &str, nodes: &str) -> String {
        format!(
            r#"<html><body>
            <div id="files-types"><table><tbody>{}</tbody></table></div>
            <div id="global-properties"><table><tbody>{}</tbody></table></div>
            <div id="node-types"><table><tbody>{}</tbody></table></div>
            </body></html>"#,
            properties, global, nodes
        )
    }

    fn row(name: &str, field: &str, expression: &str) -> String {
        format!(
            r#"<tr><td><span class="format--mono--1">{}</span></td><td><div class="developer_docs--propField--2"><span class="developer_docs--monoDisplay--3">{}</span><span>{}</span></div></td></tr>"#,
            name, field, expression
        )
    }

    #[test]
    fn test_generate_bindings() {
        let html = page(
            &format!("{}{}", row("Color", "r", "Number"), row("Vector", "x", "Number")),
            &row("Global", "id", "String"),
            &format!("{}{}", row("FRAME", "background", "Color"), row("VECTOR", "size", "Vector")),
        );
        let config = FigdocConfig::default();
        let document = HtmlDocument::parse(&html, &config.source.selectors).unwrap();

        let bindings = generate_bindings(&document, &config).unwrap();

        assert_eq!(
            bindings.properties,
            "interface Color {\n\tr: number;\n}\n\n\
             interface Vector {\n\tx: number;\n}\n\n\
             export {\n\tColor,\n\tVector,\n};"
        );
        assert_eq!(
            bindings.node,
            "import { Color, Vector, StyleType } from './properties.js';\n\n\
             interface Global {\n\tid: string;\n}\n\n\
             interface FrameNode extends Node {\n\tbackground: Color;\n}\n\n\
             interface VectorNode extends Node {\n\tsize: Vector;\n}\n\n\
             export {\n\tNode,\n\tFrameNode,\n\tVectorNode,\n};"
        );
        assert_eq!(
            bindings.unresolved_imports,
            vec!["Color".to_string(), "Vector".to_string(), "StyleType".to_string()]
        );
    }

    #[test]
    fn test_global_declarations_resolve_imports() {
        let html = page(
            &row("Color", "r", "Number"),
            &row("Color", "g", "Number"),
            &row("FRAME", "background", "Color"),
        );
        let config = FigdocConfig::default();
        let document = HtmlDocument::parse(&html, &config.source.selectors).unwrap();

        let bindings = generate_bindings(&document, &config).unwrap();
        assert_eq!(bindings.unresolved_imports, vec!["StyleType".to_string()]);
        assert!(bindings.node.starts_with("import { StyleType } from './properties.js';"));
    }

    #[test]
    fn test_missing_table() {
        let html = r#"<div id="files-types"><table><tbody></tbody></table></div>"#;
        let config = FigdocConfig::default();
        let document = HtmlDocument::parse(html, &config.source.selectors).unwrap();

        let err = generate_bindings(&document, &config).unwrap_err();
        assert!(matches!(err, FigdocError::TableNotFound { table } if table == "#global-properties table"));
    }

    #[test]
    fn test_collect_table() {
        let html = page(&row("Color", "r", "Number"), "", "");
        let config = FigdocConfig::default();
        let document = HtmlDocument::parse(&html, &config.source.selectors).unwrap();

        let types = collect_table(&document, &config.source.tables, TableKind::Properties).unwrap();
        assert_eq!(types.keys().collect::<Vec<_>>(), vec!["Color"]);
    }
}
