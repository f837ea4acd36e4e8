use serde::{Deserialize, Serialize};

/// One literal substring replacement applied to raw type expressions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

pub fn default_replacements() -> Vec<Replacement> {
    vec![
        Replacement::new("CornerRadius", "number"),
        Replacement::new("Transform", "Array<Array<number>>"),
        Replacement::new("Number", "number"),
        Replacement::new("Boolean", "boolean"),
        Replacement::new("String", "string"),
        Replacement::new("Any", "any"),
    ]
}

fn default_output_path() -> String {
    "./generated/".to_string()
}

fn default_properties_file() -> String {
    "properties.ts".to_string()
}

fn default_node_file() -> String {
    "node.ts".to_string()
}

fn default_import_path() -> String {
    "./properties.js".to_string()
}

fn default_parent_type() -> String {
    "Node".to_string()
}

fn default_extra_imports() -> Vec<String> {
    vec!["StyleType".to_string()]
}

/// Configuration for TypeScript generation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypesyncConfig {
    /// Output directory for generated files
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// File name of the properties module
    #[serde(default = "default_properties_file")]
    pub properties_file: String,
    /// File name of the node-types module
    #[serde(default = "default_node_file")]
    pub node_file: String,
    /// Module specifier the node-types module imports property types from
    #[serde(default = "default_import_path")]
    pub import_path: String,
    /// Supertype every node type extends and is suffixed with
    #[serde(default = "default_parent_type")]
    pub parent_type: String,
    /// Names imported from the properties module besides its own entities
    #[serde(default = "default_extra_imports")]
    pub extra_imports: Vec<String>,
    /// Ordered substring replacements applied to every raw type expression
    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,
}

impl Default for TypesyncConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            properties_file: default_properties_file(),
            node_file: default_node_file(),
            import_path: default_import_path(),
            parent_type: default_parent_type(),
            extra_imports: default_extra_imports(),
            replacements: default_replacements(),
        }
    }
}
