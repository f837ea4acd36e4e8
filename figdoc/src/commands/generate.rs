//! Generate command - scrapes the documentation page and writes both modules.

use crate::cli::{Cli, GenerateArgs};
use crate::commands::load_config;
use crate::source::PageSource;
use figdoc_core::{
    GeneratedBindings, HtmlDocument, error::Result, generate_bindings,
    typesync::config::TypesyncConfig,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Runs generation with default arguments.
pub async fn run_default(cli: &Cli) -> Result<()> {
    run(cli, GenerateArgs::default()).await
}

pub async fn run(cli: &Cli, args: GenerateArgs) -> Result<()> {
    info!("Starting figdoc code generation");
    let config = load_config(cli)?;

    let source = PageSource::resolve(
        args.source.input.as_deref(),
        args.source.url.as_deref(),
        &config.source,
    )?;
    let html = source.load().await?;
    debug!("Documentation page size: {} bytes", html.len());

    let bindings = {
        let document = HtmlDocument::parse(&html, &config.source.selectors)?;
        generate_bindings(&document, &config)?
    };

    if bindings.unresolved_imports.is_empty() {
        debug!("Node module imports nothing from the properties module");
    } else {
        info!(
            "Node module imports {} names from {}: {}",
            bindings.unresolved_imports.len(),
            config.typesync.import_path,
            bindings.unresolved_imports.join(", ")
        );
    }

    if args.stdout {
        println!("{}\n\n{}", bindings.properties, bindings.node);
        return Ok(());
    }

    let output_dir = PathBuf::from(&config.typesync.output_path);
    match write_bindings(&output_dir, &config.typesync, &bindings).await {
        Ok((properties_path, node_path)) => {
            info!("Property types written to {:?}", properties_path);
            info!("Node types written to {:?}", node_path);
        }
        Err(e) => {
            error!("Failed to write generated modules: {}", e);
            return Err(e);
        }
    }

    info!("figdoc code generation completed successfully");
    Ok(())
}

/// Writes the properties and node modules into `output_dir`, creating it if needed.
pub async fn write_bindings(
    output_dir: &Path,
    typesync: &TypesyncConfig,
    bindings: &GeneratedBindings,
) -> Result<(PathBuf, PathBuf)> {
    if !output_dir.exists() {
        warn!("Output directory {:?} does not exist, creating it", output_dir);
        tokio::fs::create_dir_all(output_dir).await?;
    }

    let properties_path = output_dir.join(&typesync.properties_file);
    let node_path = output_dir.join(&typesync.node_file);

    tokio::fs::write(&properties_path, format!("{}\n", bindings.properties)).await?;
    tokio::fs::write(&node_path, format!("{}\n", bindings.node)).await?;

    Ok((properties_path, node_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bindings() -> GeneratedBindings {
        GeneratedBindings {
            properties: "interface Color {\n\tr: number;\n}\n\nexport {\n\tColor,\n};".to_string(),
            node: "import { Color } from './properties.js';".to_string(),
            unresolved_imports: vec!["Color".to_string()],
        }
    }

    #[tokio::test]
    async fn test_write_bindings_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let output_dir = dir.path().join("generated").join("figma");
        let typesync = TypesyncConfig::default();

        let (properties_path, node_path) = write_bindings(&output_dir, &typesync, &bindings())
            .await
            .unwrap();

        assert_eq!(properties_path, output_dir.join("properties.ts"));
        assert_eq!(node_path, output_dir.join("node.ts"));
        assert_eq!(
            std::fs::read_to_string(&properties_path).unwrap(),
            "interface Color {\n\tr: number;\n}\n\nexport {\n\tColor,\n};\n"
        );
        assert_eq!(
            std::fs::read_to_string(&node_path).unwrap(),
            "import { Color } from './properties.js';\n"
        );
    }

    #[tokio::test]
    async fn test_write_bindings_custom_file_names() {
        let dir = tempfile::TempDir::new().unwrap();
        let typesync = TypesyncConfig {
            properties_file: "props.d.ts".to_string(),
            node_file: "nodes.d.ts".to_string(),
            ..TypesyncConfig::default()
        };

        let (properties_path, node_path) = write_bindings(dir.path(), &typesync, &bindings())
            .await
            .unwrap();

        assert!(properties_path.ends_with("props.d.ts"));
        assert!(node_path.ends_with("nodes.d.ts"));
        assert!(properties_path.is_file());
        assert!(node_path.is_file());
    }
}
