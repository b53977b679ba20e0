use contracts::shared::status::{
    AliasTableBuilder, RankTable, StatusConfigError, StatusResolver,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Optional log file, appended to
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Extra aliases and rank overrides on top of the builtin tables
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatusConfig {
    /// alias -> canonical code
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// canonical code -> rank
    #[serde(default)]
    pub ranks: BTreeMap<String, u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    #[serde(default = "default_id_column")]
    pub id_column: String,
    #[serde(default = "default_title_column")]
    pub title_column: String,
    #[serde(default = "default_status_column")]
    pub status_column: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            id_column: default_id_column(),
            title_column: default_title_column(),
            status_column: default_status_column(),
        }
    }
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_title_column() -> String {
    "title".to_string()
}

fn default_status_column() -> String {
    "status".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[logging]
filter = "info"

[status.aliases]

[status.ranks]

[import]
id_column = "id"
title_column = "title"
status_column = "status"
"#;

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Embedded default; `searched` is the config.toml path that was missing
    Embedded { searched: Option<PathBuf> },
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded { searched: Some(path) } => write!(
                f,
                "embedded default (config.toml not found at: {})",
                path.display()
            ),
            ConfigSource::Embedded { searched: None } => write!(f, "embedded default"),
        }
    }
}

/// Configuration together with its source.
///
/// Loading happens before the logger is initialized, so the source is
/// reported by the caller afterwards.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<LoadedConfig> {
    let searched = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("config.toml")));

    match searched {
        Some(config_path) if config_path.exists() => load_config_from(&config_path),
        searched => Ok(LoadedConfig {
            config: toml::from_str(DEFAULT_CONFIG)?,
            source: ConfigSource::Embedded { searched },
        }),
    }
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> anyhow::Result<LoadedConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read config {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&contents)?;
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path.to_path_buf()),
    })
}

/// Resolve the log file path, if any. Relative paths are taken from the
/// current directory.
pub fn get_log_file_path(config: &Config) -> Option<PathBuf> {
    config.logging.file.as_ref().map(PathBuf::from)
}

/// Build a resolver from the builtin tables plus configured overrides
pub fn build_resolver(status: &StatusConfig) -> Result<StatusResolver, StatusConfigError> {
    let mut aliases = AliasTableBuilder::from_builtin();

    for (alias, code) in &status.aliases {
        match aliases.insert_code(alias, code)? {
            Some(previous) if previous.code() != code.trim().to_lowercase() => {
                tracing::warn!(
                    "Status alias '{}' remapped: {} -> {}",
                    alias.trim(),
                    previous,
                    code.trim()
                );
            }
            Some(_) => {}
            None => tracing::debug!("Status alias '{}' added -> {}", alias.trim(), code.trim()),
        }
    }

    let ranks = RankTable::builtin()
        .with_overrides(status.ranks.iter().map(|(code, rank)| (code.as_str(), *rank)))?;

    Ok(StatusResolver::new(aliases.build(), ranks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::status::CanonicalStatus;
    use maplit::btreemap;
    use std::io::Write;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.import.status_column, "status");
        assert!(config.status.aliases.is_empty());
        assert!(config.status.ranks.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[status.ranks]\nunknown = 4\n").unwrap();
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.import.id_column, "id");
        assert_eq!(config.status.ranks.get("unknown"), Some(&4));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nfilter = \"debug\"\nfile = \"logs/app.log\"\n\n[status.aliases]\n\"wip\" = \"active\"\n"
        )
        .unwrap();

        let loaded = load_config_from(file.path()).unwrap();
        assert_eq!(loaded.source, ConfigSource::File(file.path().to_path_buf()));
        let config = loaded.config;
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(get_log_file_path(&config), Some(PathBuf::from("logs/app.log")));
        assert_eq!(config.status.aliases.get("wip").map(String::as_str), Some("active"));
    }

    #[test]
    fn test_load_config_from_missing_file() {
        assert!(load_config_from(Path::new("/nonexistent/config.toml")).is_err());
    }

    #[test]
    fn test_load_config_reports_source() {
        let loaded = load_config().unwrap();
        match &loaded.source {
            ConfigSource::File(path) => assert!(path.ends_with("config.toml")),
            ConfigSource::Embedded { .. } => {
                assert_eq!(loaded.config.logging.filter, "info");
                assert!(loaded.config.status.aliases.is_empty());
            }
        }
    }

    #[test]
    fn test_config_source_display() {
        let file = ConfigSource::File(PathBuf::from("/etc/status/config.toml"));
        assert_eq!(file.to_string(), "/etc/status/config.toml");

        let embedded = ConfigSource::Embedded {
            searched: Some(PathBuf::from("/opt/bin/config.toml")),
        };
        assert_eq!(
            embedded.to_string(),
            "embedded default (config.toml not found at: /opt/bin/config.toml)"
        );
        assert_eq!(
            ConfigSource::Embedded { searched: None }.to_string(),
            "embedded default"
        );
    }

    #[test]
    fn test_build_resolver_with_overrides() {
        let status = StatusConfig {
            aliases: btreemap! {
                "  WIP ".to_string() => "active".to_string(),
                "closed".to_string() => "archived".to_string(),
            },
            ranks: btreemap! {
                "unknown".to_string() => 4,
            },
        };

        let resolver = build_resolver(&status).unwrap();
        assert_eq!(resolver.normalize("wip"), CanonicalStatus::Active);
        assert_eq!(resolver.normalize("Closed"), CanonicalStatus::Archived);
        assert_eq!(resolver.normalize("done"), CanonicalStatus::Completed);
        assert_eq!(resolver.rank(CanonicalStatus::Unknown), 4);
        assert_eq!(resolver.rank(CanonicalStatus::Pending), 1);
    }

    #[test]
    fn test_build_resolver_rejects_bad_config() {
        let bad_alias = StatusConfig {
            aliases: btreemap! { " ".to_string() => "active".to_string() },
            ..Default::default()
        };
        assert_eq!(
            build_resolver(&bad_alias).unwrap_err(),
            StatusConfigError::EmptyAlias
        );

        let bad_rank = StatusConfig {
            ranks: btreemap! { "todo".to_string() => 0 },
            ..Default::default()
        };
        assert_eq!(
            build_resolver(&bad_rank).unwrap_err(),
            StatusConfigError::UnknownStatusCode {
                code: "todo".to_string()
            }
        );
    }
}
