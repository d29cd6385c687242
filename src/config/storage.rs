//! Ledger storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Which ledger representation backs the store.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON document holding a per-group ledger keyed by person.
    #[default]
    Document,
    /// Normalized SQLite schema.
    Relational,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding ledger files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Document file stem, stored as `<data_dir>/<document_name>.json`
    #[serde(default = "default_document_name")]
    pub document_name: String,

    /// SQLite connection URL; derived from `data_dir` when unset
    pub database_url: Option<String>,

    /// Maximum pooled SQLite connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Group used when a payment names none
    #[serde(default = "default_group")]
    pub default_group: String,
}

impl StorageConfig {
    /// Path of the ledger document.
    pub fn document_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.document_name))
    }

    /// SQLite URL, falling back to `sqlite://<data_dir>/payments.db`.
    pub fn database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!(
                "sqlite://{}",
                Path::new(&self.data_dir).join("payments.db").display()
            ),
        }
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DATA_DIR"));
        }
        if self.document_name.trim().is_empty()
            || self.document_name.contains(['/', '\\'])
        {
            return Err(ValidationError::InvalidDocumentName);
        }
        if let Some(url) = &self.database_url {
            if !url.starts_with("sqlite:") {
                return Err(ValidationError::InvalidDatabaseUrl);
            }
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.default_group.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DEFAULT_GROUP"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            document_name: default_document_name(),
            database_url: None,
            max_connections: default_max_connections(),
            default_group: default_group(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_document_name() -> String {
    "default".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_group() -> String {
    "default".to_string()
}
