//! Init command - writes a commented default figdoc.toml.

use crate::cli::{Cli, InitArgs};
use figdoc_core::config::CONFIG_FILE_NAME;
use figdoc_core::error::Result;
use std::path::Path;
use tracing::{error, info};

pub const CONFIG_TEMPLATE: &str = r##"# figdoc configuration

[source]
# Saved copy of the developer docs page. Takes precedence over `url`.
# input = "./docs/developer_docs.html"
# url = "${FIGDOC_DOCS_URL}"

[source.tables]
properties = "#files-types table"
global_properties = "#global-properties table"
node_types = "#node-types table"

# Class names on the docs page carry a hashed suffix, so match on prefixes.
[source.selectors]
row = "tbody > tr"
entity_name = "td:first-child [class^=format--mono--]"
property_field = "[class^=developer_docs--propField]"
field_name = "[class^=developer_docs--monoDisplay]"
literal = "[class^=format--string]"
reference_link = "[class^=developer_docs--propDesc] a"

[typesync]
output_path = "./generated/"
properties_file = "properties.ts"
node_file = "node.ts"
import_path = "./properties.js"
parent_type = "Node"
extra_imports = ["StyleType"]

# Applied in order to every raw type expression.
[[typesync.replacements]]
from = "CornerRadius"
to = "number"

[[typesync.replacements]]
from = "Transform"
to = "Array<Array<number>>"

[[typesync.replacements]]
from = "Number"
to = "number"

[[typesync.replacements]]
from = "Boolean"
to = "boolean"

[[typesync.replacements]]
from = "String"
to = "string"

[[typesync.replacements]]
from = "Any"
to = "any"
"##;

pub async fn run(_cli: &Cli, args: InitArgs) -> Result<()> {
    write_config(Path::new(CONFIG_FILE_NAME), args.force).await
}

async fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        error!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(());
    }

    tokio::fs::write(config_path, CONFIG_TEMPLATE).await?;
    info!("Created {}", CONFIG_FILE_NAME);
    info!("Next steps:");
    info!("  1. Point [source] at a saved copy or the URL of the developer docs");
    info!("  2. Run 'figdoc generate' to write the TypeScript modules");

    Ok(())
}
