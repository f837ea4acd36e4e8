//! Inspect command - prints the type description of one table as JSON.

use crate::cli::{Cli, InspectArgs};
use crate::commands::load_config;
use crate::source::PageSource;
use figdoc_core::{
    HtmlDocument,
    bindings::{TableKind, collect_table},
    error::Result,
};
use tracing::info;

pub async fn run(cli: &Cli, args: InspectArgs) -> Result<()> {
    let config = load_config(cli)?;
    let source = PageSource::resolve(
        args.source.input.as_deref(),
        args.source.url.as_deref(),
        &config.source,
    )?;
    let html = source.load().await?;

    let kind = TableKind::from(args.table);
    let types = {
        let document = HtmlDocument::parse(&html, &config.source.selectors)?;
        collect_table(&document, &config.source.tables, kind)?
    };
    info!("Collected {} entities from the {:?} table", types.len(), kind);

    println!("{}", serde_json::to_string_pretty(&types)?);
    Ok(())
}
