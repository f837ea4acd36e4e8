//! Loading the documentation page from disk or over HTTP.

use figdoc_core::config::SourceConfig;
use figdoc_core::error::{FigdocError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    File(PathBuf),
    Url(String),
}

impl PageSource {
    /// Command-line arguments win over the config file; a file wins over a URL.
    pub fn resolve(
        input: Option<&Path>,
        url: Option<&str>,
        config: &SourceConfig,
    ) -> Result<PageSource> {
        if let Some(input) = input {
            return Ok(PageSource::File(input.to_path_buf()));
        }
        if let Some(url) = url {
            return Ok(PageSource::Url(url.to_string()));
        }
        if let Some(input) = &config.input {
            return Ok(PageSource::File(PathBuf::from(input)));
        }
        if let Some(url) = &config.url {
            return Ok(PageSource::Url(url.clone()));
        }

        Err(FigdocError::config(
            "no documentation page given; pass --input or --url, or set [source] input/url",
        ))
    }

    pub async fn load(&self) -> Result<String> {
        match self {
            PageSource::File(path) => {
                info!("Reading documentation page from {:?}", path);
                Ok(tokio::fs::read_to_string(path).await?)
            }
            PageSource::Url(url) => {
                info!("Fetching documentation page from {}", url);
                let client = reqwest::Client::builder()
                    .user_agent(concat!("figdoc/", env!("CARGO_PKG_VERSION")))
                    .build()
                    .map_err(|e| FigdocError::network(e.to_string()))?;

                let body = client
                    .get(url)
                    .send()
                    .await
                    .and_then(|response| response.error_for_status())
                    .map_err(|e| FigdocError::network(e.to_string()))?
                    .text()
                    .await
                    .map_err(|e| FigdocError::network(e.to_string()))?;

                debug!(bytes = body.len(), "Fetched documentation page");
                Ok(body)
            }
        }
    }
}
