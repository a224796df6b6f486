// crates/locode-core/src/config.rs

//! Application configuration, read from a YAML file.
//!
//! ```yaml
//! airport_codes:
//!   unlocode_zip: data/loc211csv.zip
//! postgresdb:
//!   host: localhost
//!   user: etl
//!   password: secret
//!   dbname: warehouse
//! staging:
//!   path: data/staging/unlocode.jsonl.gz
//! ```

use crate::error::{LocodeError, Result};
use crate::loader::{SourceEncoding, DEFAULT_PATTERN};
use crate::warehouse::DEFAULT_TABLE;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Looked for in the working directory first.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Fallback location of the config file.
pub const CONFIG_ENV_VAR: &str = "AC_CFG";

pub const REQUIRED_KEYS: [&str; 3] = ["airport_codes", "postgresdb", "staging"];

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub airport_codes: AirportCodesConfig,
    pub postgresdb: PostgresConfig,
    pub staging: StagingConfig,
}

/// Where the code list comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportCodesConfig {
    pub unlocode_zip: PathBuf,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub encoding: SourceEncoding,
}

#[derive(Clone, Deserialize)]
pub struct PostgresConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub dbname: String,
    #[serde(default = "default_table")]
    pub table: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StagingConfig {
    pub path: PathBuf,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            LocodeError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&text)
    }

    /// Parses the config, checking the root keys before the details.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        let root = match value.as_mapping() {
            Some(m) => m,
            None => return Err(LocodeError::Config("Missing configuration".into())),
        };
        for key in REQUIRED_KEYS {
            if !root.contains_key(key) {
                return Err(LocodeError::Config(format!("Missing {key} configuration key")));
            }
        }
        Ok(serde_yaml::from_value(value)?)
    }
}

impl PostgresConfig {
    /// libpq-style key/value connection string.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            quote(&self.host),
            self.port,
            quote(&self.user),
            quote(&self.password),
            quote(&self.dbname)
        )
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("dbname", &self.dbname)
            .field("table", &self.table)
            .finish()
    }
}

fn quote(v: &str) -> String {
    format!("'{}'", v.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Finds the config file without prompting.
///
/// Order: an explicit path, `config.yaml` in the working directory, then the
/// path named by `AC_CFG`. Only existing files are returned.
pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
    discover_with(explicit, Path::new(DEFAULT_CONFIG_FILE), std::env::var_os(CONFIG_ENV_VAR))
}

fn discover_with(
    explicit: Option<&Path>,
    default: &Path,
    from_env: Option<std::ffi::OsString>,
) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return p.is_file().then(|| p.to_path_buf());
    }
    if default.is_file() {
        return Some(default.to_path_buf());
    }
    from_env.map(PathBuf::from).filter(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
airport_codes:
  unlocode_zip: data/loc211csv.zip
  encoding: latin_1
postgresdb:
  host: db.internal
  user: etl
  password: "it's"
  dbname: warehouse
staging:
  path: staging/unlocode.jsonl.gz
"#;

    #[test]
    fn defaults_fill_optional_settings() {
        let cfg = AppConfig::from_yaml(FULL).unwrap();
        assert_eq!(cfg.airport_codes.pattern, DEFAULT_PATTERN);
        assert_eq!(cfg.airport_codes.encoding, SourceEncoding::Latin1);
        assert_eq!(cfg.postgresdb.port, 5432);
        assert_eq!(cfg.postgresdb.table, "airport_codes");
    }

    #[test]
    fn missing_root_key_is_named() {
        let text = FULL.replace("staging:\n  path: staging/unlocode.jsonl.gz\n", "");
        let err = AppConfig::from_yaml(&text).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Missing staging configuration key");
    }

    #[test]
    fn non_mapping_is_missing_configuration() {
        let err = AppConfig::from_yaml("- a\n- b\n").unwrap_err();
        assert!(matches!(err, LocodeError::Config(_)));
    }

    #[test]
    fn password_is_quoted_and_hidden() {
        let cfg = AppConfig::from_yaml(FULL).unwrap();
        assert!(cfg
            .postgresdb
            .connection_string()
            .contains("password='it\\'s'"));
        assert!(!format!("{:?}", cfg.postgresdb).contains("it's"));
    }

    #[test]
    fn discovery_prefers_default_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("config.yaml");
        let other = dir.path().join("other.yaml");
        fs::write(&other, FULL).unwrap();

        assert_eq!(discover_with(None, &default, None), None);
        assert_eq!(
            discover_with(None, &default, Some(other.clone().into_os_string())),
            Some(other.clone())
        );

        fs::write(&default, FULL).unwrap();
        assert_eq!(
            discover_with(None, &default, Some(other.clone().into_os_string())),
            Some(default.clone())
        );
        assert_eq!(discover_with(Some(&other), &default, None), Some(other));
    }
}
