use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::forum::{
    DEFAULT_AUTHOR_NAME, DEFAULT_STORAGE_KEY, FileKeyValueStore, ForumPersistence, types::Author,
};

const SCHEMA_FILE_NAME: &str = "forum.schema.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForumConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./state")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_author_name() -> String {
    DEFAULT_AUTHOR_NAME.to_string()
}

fn default_enabled_true() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs/forum")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// Identity stamped on posts created from this host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    #[serde(default = "default_author_name")]
    pub name: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: default_author_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

impl ForumConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        validate_against_schema(&config_value, &schema_path)?;

        let mut config: ForumConfig =
            serde_json::from_value(config_value).context("failed to deserialize forum config")?;

        if !config.storage.dir.is_absolute() {
            config.storage.dir = config_base.join(&config.storage.dir);
        }
        if !config.logging.dir.is_absolute() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }

        Ok(config)
    }

    pub fn author(&self) -> Author {
        Author::new(self.author.name.clone())
    }

    pub fn open_persistence(&self) -> ForumPersistence {
        let store = FileKeyValueStore::new(self.storage.dir.clone());
        ForumPersistence::new(Arc::new(store), self.storage.key.clone())
    }
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join(SCHEMA_FILE_NAME);
    if local_default.exists() {
        return Ok(local_default);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or {SCHEMA_FILE_NAME} next to it"
    ))
}

fn validate_against_schema(config_value: &Value, schema_path: &Path) -> Result<()> {
    let schema_text = fs::read_to_string(schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    let schema: Value = serde_json::from_str(&schema_text)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;
    let validator = JSONSchema::compile(&schema)
        .map_err(|error| anyhow!("schema {} is not usable: {error}", schema_path.display()))?;

    let violations: Vec<String> = match validator.validate(config_value) {
        Ok(()) => return Ok(()),
        Err(errors) => errors.map(|error| describe_violation(&error)).collect(),
    };
    Err(anyhow!(
        "forum config does not match {}: {}",
        schema_path.display(),
        violations.join("; ")
    ))
}

/// Prefixes the offending JSON pointer so nested violations name their key.
fn describe_violation(error: &ValidationError<'_>) -> String {
    let pointer = error.instance_path.to_string();
    if pointer.is_empty() {
        error.to_string()
    } else {
        format!("{pointer}: {error}")
    }
}
