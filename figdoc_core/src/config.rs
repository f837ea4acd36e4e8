use crate::error::{FigdocError, Result};
use crate::typesync::config::TypesyncConfig;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

pub const CONFIG_FILE_NAME: &str = "figdoc.toml";

/// CSS selectors giving each documentation element its role.
///
/// The defaults match the class-name prefixes of the developer docs page;
/// the hashed suffixes change between deploys, the prefixes do not.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub row: String,
    pub entity_name: String,
    pub property_field: String,
    pub field_name: String,
    pub literal: String,
    pub reference_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            row: "tbody > tr".to_string(),
            entity_name: "td:first-child [class^=format--mono--]".to_string(),
            property_field: "[class^=developer_docs--propField]".to_string(),
            field_name: "[class^=developer_docs--monoDisplay]".to_string(),
            literal: "[class^=format--string]".to_string(),
            reference_link: "[class^=developer_docs--propDesc] a".to_string(),
        }
    }
}

/// Selectors locating the three documentation tables on the page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TablesConfig {
    pub properties: String,
    pub global_properties: String,
    pub node_types: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            properties: "#files-types table".to_string(),
            global_properties: "#global-properties table".to_string(),
            node_types: "#node-types table".to_string(),
        }
    }
}

/// Where the documentation page comes from and how to read it
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Path to a saved copy of the documentation page
    #[serde(default)]
    pub input: Option<String>,

    /// URL of the live documentation page, used when no input file is set
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub tables: TablesConfig,

    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// Root configuration, read from `figdoc.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FigdocConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub typesync: TypesyncConfig,
}

impl FigdocConfig {
    /// Load an explicit config file, or search for one, falling back to the
    /// built-in defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> Result<FigdocConfig> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::find_config_file() {
            Ok(path) => Self::from_path(&path),
            Err(FigdocError::Config(_)) => {
                warn!("No {} found, using default configuration", CONFIG_FILE_NAME);
                Ok(FigdocConfig::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn from_path(config_path: &Path) -> Result<FigdocConfig> {
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");
        info!("Reading configuration file at: {:?}", config_path);

        if !config_path.is_file() {
            error!("Configuration path is not a file: {:?}", config_path);
            return Err(FigdocError::InvalidPath {
                path: config_path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(config_path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            FigdocError::from(e)
        })?;

        debug!("Configuration file size: {} bytes", contents.len());
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<FigdocConfig> {
        let mut config: FigdocConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            FigdocError::from(e)
        })?;

        debug!("Substituting environment variables in configuration");
        if let Some(input) = &config.source.input {
            config.source.input = Some(Self::substitute_env_vars(input)?);
        }
        if let Some(url) = &config.source.url {
            config.source.url = Some(Self::substitute_env_vars(url)?);
        }
        config.typesync.output_path = Self::substitute_env_vars(&config.typesync.output_path)?;

        debug!(
            "Tables: properties={:?}, global={:?}, nodes={:?}; {} replacements",
            config.source.tables.properties,
            config.source.tables.global_properties,
            config.source.tables.node_types,
            config.typesync.replacements.len()
        );

        Ok(config)
    }

    /// Searches for `figdoc.toml` starting from the current directory
    /// and traversing up to the root.
    fn find_config_file() -> Result<PathBuf> {
        let current_dir = env::current_dir()?;
        debug!("Starting config file search from: {:?}", current_dir);

        Self::find_config_file_from(&current_dir).ok_or_else(|| {
            FigdocError::config(format!(
                "{} not found in current or any parent directory.",
                CONFIG_FILE_NAME
            ))
        })
    }

    fn find_config_file_from(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|path| {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            config_path.exists().then_some(config_path)
        })
    }

    /// Substitute environment variables in config strings
    /// Supports ${VAR_NAME:-default} syntax
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(FigdocError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
