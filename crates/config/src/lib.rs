use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "firmdesk.toml",
    "config/firmdesk.toml",
    "crates/config/firmdesk.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub openapi: OpenApiConfig,
    pub output: OutputConfig,
}

/// Info block written into the generated OpenAPI document.
///
/// ```
/// use firmdesk_config::OpenApiConfig;
///
/// let openapi = OpenApiConfig::default();
/// assert_eq!(openapi.title, "Firmdesk Contracts");
/// assert!(openapi.description.is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiConfig {
    #[serde(default = "OpenApiConfig::default_title")]
    pub title: String,
    #[serde(default = "OpenApiConfig::default_version")]
    pub version: String,
    #[serde(default = "OpenApiConfig::default_description")]
    pub description: Option<String>,
}

impl OpenApiConfig {
    fn default_title() -> String {
        "Firmdesk Contracts".to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn default_description() -> Option<String> {
        Some("Records exchanged between the Firmdesk frontend and backend".to_string())
    }
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            version: Self::default_version(),
            description: Self::default_description(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination file; stdout when unset
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "OutputConfig::default_pretty")]
    pub pretty: bool,
}

impl OutputConfig {
    const fn default_pretty() -> bool {
        true
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            pretty: Self::default_pretty(),
        }
    }
}

/// Load the configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use firmdesk_config::load;
///
/// std::env::remove_var("FIRMDESK_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.openapi.title.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("openapi.title", defaults.openapi.title.clone())
        .context("invalid default for openapi.title")?
        .set_default("openapi.version", defaults.openapi.version.clone())
        .context("invalid default for openapi.version")?
        .set_default("output.pretty", defaults.output.pretty)
        .context("invalid default for output.pretty")?;

    if let Some(description) = defaults.openapi.description.clone() {
        builder = builder
            .set_default("openapi.description", description)
            .context("invalid default for openapi.description")?;
    }

    // Values stay strings; typed fields are converted on deserialize
    let environment_overrides = config::Environment::with_prefix("FIRMDESK").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("FIRMDESK_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via FIRMDESK_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded export configuration");
    Ok(config)
}
