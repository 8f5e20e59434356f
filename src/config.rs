//! Configuration file support for dep-report.
//!
//! Provides YAML-based configuration through `dep-report.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line arguments.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use dep_report::adapters::outbound::network::{DEFAULT_TIMEOUT, NUGET_FLAT_CONTAINER_URL};
use dep_report::application::dto::OutputFormat;
use dep_report::dependency_report::policies::LicensePolicy;
use dep_report::dependency_report::services::ExcludeMode;
use dep_report::shared::error::ReportError;
use dep_report::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "dep-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub group: Option<String>,
    pub output: Option<String>,
    pub exclude: Option<String>,
    pub exclude_mode: Option<String>,
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub registry_url: Option<String>,
    pub strict_licenses: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Fully resolved run settings after merging CLI and config file values.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub group: String,
    pub output: String,
    pub exclude: Option<String>,
    pub exclude_mode: ExcludeMode,
    pub format: OutputFormat,
    pub timeout: Duration,
    pub registry_url: String,
    pub license_policy: LicensePolicy,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::ConfigRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReportError::ConfigParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "using discovered config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        OutputFormat::from_str(format).map_err(invalid)?;
    }
    if let Some(ref mode) = config.exclude_mode {
        ExcludeMode::from_str(mode).map_err(invalid)?;
    }
    if let Some(timeout) = config.timeout_secs {
        validate_timeout(timeout)?;
    }
    if let Some(ref url) = config.registry_url {
        validate_registry_url(url)?;
    }
    Ok(())
}

fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(invalid("timeout must be greater than 0 seconds".to_string()).into());
    }
    Ok(())
}

fn validate_registry_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(invalid(format!(
            "registry URL must start with http:// or https://, got '{}'",
            url
        ))
        .into());
    }
    Ok(())
}

fn invalid(message: String) -> ReportError {
    ReportError::Validation { message }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Merges command-line arguments over config file values.
///
/// # Errors
/// [`ReportError::Validation`] when input or group is missing after the merge,
/// or when a merged value is out of range.
pub fn merge_settings(args: Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();

    let input = args.input.or(config.input).ok_or_else(|| {
        invalid("an input file is required (--input or 'input' in the config file)".to_string())
    })?;

    let group = args
        .group
        .or(config.group)
        .filter(|g| !g.trim().is_empty())
        .ok_or_else(|| {
            invalid("a group name is required (--group or 'group' in the config file)".to_string())
        })?;

    let format = match args.format {
        Some(format) => format,
        None => config
            .format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(invalid)?
            .unwrap_or_default(),
    };

    let exclude_mode = match args.exclude_mode {
        Some(mode) => mode,
        None => config
            .exclude_mode
            .as_deref()
            .map(ExcludeMode::from_str)
            .transpose()
            .map_err(invalid)?
            .unwrap_or_default(),
    };

    let timeout = match args.timeout.or(config.timeout_secs) {
        Some(secs) => {
            validate_timeout(secs)?;
            Duration::from_secs(secs)
        }
        None => DEFAULT_TIMEOUT,
    };

    let registry_url = args
        .registry_url
        .or(config.registry_url)
        .unwrap_or_else(|| NUGET_FLAT_CONTAINER_URL.to_string());
    validate_registry_url(&registry_url)?;

    let license_policy = if args.strict_licenses || config.strict_licenses.unwrap_or(false) {
        LicensePolicy::Strict
    } else {
        LicensePolicy::Lenient
    };

    Ok(Settings {
        input,
        group,
        output: args
            .output
            .or(config.output)
            .unwrap_or_else(|| format.default_file_name().to_string()),
        exclude: args.exclude.or(config.exclude),
        exclude_mode,
        format,
        timeout,
        registry_url,
        license_policy,
    })
}
