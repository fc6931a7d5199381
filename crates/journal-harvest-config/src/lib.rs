use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding `vault_path`.
pub const BASE_PATH_VAR: &str = "BASE_PATH";
/// Environment variable overriding `last_run_file`.
pub const LAST_RUN_FILE_VAR: &str = "LAST_RUN_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No vault path configured: pass --vault, set BASE_PATH, or create {config_path}")]
    MissingVault { config_path: PathBuf },
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Root of the notes vault.
    pub vault_path: PathBuf,
    /// Daily journal folder, relative to the vault unless absolute.
    #[serde(default = "default_journal_dir")]
    pub journal_dir: PathBuf,
    /// Inbox folder the organizer empties, relative to the vault unless absolute.
    #[serde(default = "default_inbox_dir")]
    pub inbox_dir: PathBuf,
    /// Where the date of the last incremental run is kept.
    #[serde(default)]
    pub last_run_file: Option<PathBuf>,
    /// Log of saved notes, relative to the vault unless absolute.
    #[serde(default = "default_run_log")]
    pub run_log: PathBuf,
    /// Custom tag line regex; the built-in pattern is used when unset.
    #[serde(default)]
    pub tag_pattern: Option<String>,
}

fn default_journal_dir() -> PathBuf {
    PathBuf::from("journals")
}

fn default_inbox_dir() -> PathBuf {
    PathBuf::from("00. Inbox")
}

fn default_run_log() -> PathBuf {
    PathBuf::from("journal-harvest-run.log")
}

impl Config {
    pub fn new(vault_path: PathBuf) -> Self {
        Self {
            vault_path,
            journal_dir: default_journal_dir(),
            inbox_dir: default_inbox_dir(),
            last_run_file: None,
            run_log: default_run_log(),
            tag_pattern: None,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.vault_path = Self::expand_or_keep(config.vault_path);
        config.journal_dir = Self::expand_or_keep(config.journal_dir);
        config.inbox_dir = Self::expand_or_keep(config.inbox_dir);
        config.run_log = Self::expand_or_keep(config.run_log);
        config.last_run_file = config.last_run_file.map(Self::expand_or_keep);

        Ok(Some(config))
    }

    /// Loads the config file and layers overrides on top of it.
    ///
    /// Precedence, lowest first: config file, `BASE_PATH` / `LAST_RUN_FILE`
    /// from `env`, then `vault_override`. Without any vault path this fails.
    pub fn resolve<F>(
        config_path: &Path,
        vault_override: Option<PathBuf>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_from_path(config_path)?;

        let vault = vault_override
            .or_else(|| env(BASE_PATH_VAR).map(PathBuf::from))
            .map(Self::expand_or_keep);
        if let Some(vault) = vault {
            config = Some(match config {
                Some(mut config) => {
                    config.vault_path = vault;
                    config
                }
                None => Self::new(vault),
            });
        }

        let mut config = config.ok_or_else(|| ConfigError::MissingVault {
            config_path: config_path.to_path_buf(),
        })?;

        if let Some(last_run) = env(LAST_RUN_FILE_VAR) {
            config.last_run_file = Some(Self::expand_or_keep(PathBuf::from(last_run)));
        }

        Ok(config)
    }

    pub fn config_dir() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/journal-harvest");
        PathBuf::from(config_dir.as_ref())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn journal_path(&self) -> PathBuf {
        self.vault_path.join(&self.journal_dir)
    }

    pub fn inbox_path(&self) -> PathBuf {
        self.vault_path.join(&self.inbox_dir)
    }

    pub fn run_log_path(&self) -> PathBuf {
        self.vault_path.join(&self.run_log)
    }

    pub fn last_run_path(&self) -> PathBuf {
        self.last_run_file
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("last_run.txt"))
    }

    fn expand_or_keep(path: PathBuf) -> PathBuf {
        Self::expand_path(&path).unwrap_or(path)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/journal-harvest/config.toml"));
    }

    #[test]
    fn test_defaults_from_minimal_toml() {
        let config: Config = toml::from_str(r#"vault_path = "/vault""#).unwrap();

        assert_eq!(config.journal_path(), PathBuf::from("/vault/journals"));
        assert_eq!(config.inbox_path(), PathBuf::from("/vault/00. Inbox"));
        assert_eq!(
            config.run_log_path(),
            PathBuf::from("/vault/journal-harvest-run.log")
        );
        assert!(config.last_run_path().ends_with("journal-harvest/last_run.txt"));
        assert!(config.tag_pattern.is_none());
    }

    #[test]
    fn test_absolute_subpaths_win() {
        let config: Config = toml::from_str(
            r#"
vault_path = "/vault"
journal_dir = "/elsewhere/journals"
last_run_file = "/state/last_run.txt"
"#,
        )
        .unwrap();

        assert_eq!(config.journal_path(), PathBuf::from("/elsewhere/journals"));
        assert_eq!(config.last_run_path(), PathBuf::from("/state/last_run.txt"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("JH_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$JH_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("JH_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_undefined_var_keeps_path() {
        let path = PathBuf::from("$JH_SURELY_UNDEFINED_VAR/notes");
        assert_eq!(Config::expand_or_keep(path.clone()), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "vault_path = [").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "vault_path = \"~/vault\"\ntag_pattern = '@\\w+'\nrun_log = \"logs/run.log\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(!config.vault_path.to_string_lossy().starts_with('~'));
        assert!(config.vault_path.ends_with("vault"));
        assert_eq!(config.tag_pattern.as_deref(), Some(r"@\w+"));
        assert!(config.run_log_path().ends_with("vault/logs/run.log"));
        assert_eq!(config.last_run_file, None);
    }

    #[test]
    fn test_resolve_without_anything_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let result = Config::resolve(&config_file, None, vars(&[]));
        assert!(matches!(result, Err(ConfigError::MissingVault { .. })));
    }

    #[test]
    fn test_resolve_from_env_only() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let config = Config::resolve(
            &config_file,
            None,
            vars(&[(BASE_PATH_VAR, "/env/vault"), (LAST_RUN_FILE_VAR, "/env/last")]),
        )
        .unwrap();

        assert_eq!(config.vault_path, PathBuf::from("/env/vault"));
        assert_eq!(config.last_run_path(), PathBuf::from("/env/last"));
    }

    #[test]
    fn test_resolve_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "vault_path = \"/file/vault\"\njournal_dir = \"daily\"\n",
        )
        .unwrap();

        let from_env = Config::resolve(&config_file, None, vars(&[(BASE_PATH_VAR, "/env/vault")]))
            .unwrap();
        assert_eq!(from_env.journal_path(), PathBuf::from("/env/vault/daily"));

        let from_cli = Config::resolve(
            &config_file,
            Some(PathBuf::from("/cli/vault")),
            vars(&[(BASE_PATH_VAR, "/env/vault")]),
        )
        .unwrap();
        assert_eq!(from_cli.vault_path, PathBuf::from("/cli/vault"));

        let from_file = Config::resolve(&config_file, None, vars(&[])).unwrap();
        assert_eq!(from_file.vault_path, PathBuf::from("/file/vault"));
    }
}
