use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_SOURCE_DIR, DEFAULT_SOURCE_FILE, DEFAULT_SOURCE_SUBDIR};
use crate::error::{CleanerError, Result};

/// Run configuration. The only recognized option is the source path:
///
/// ```toml
/// [source]
/// path = "data/raw/patients.json"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Relative paths resolve against the executable's directory
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Loads `config_path` when given, defaults otherwise
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The patient source for this run, anchored at `base_dir` when relative
    pub fn source_path(&self, base_dir: &Path) -> PathBuf {
        match &self.source.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => base_dir
                .join(DEFAULT_SOURCE_DIR)
                .join(DEFAULT_SOURCE_SUBDIR)
                .join(DEFAULT_SOURCE_FILE),
        }
    }
}

/// Directory containing the running executable, or the empty (current) path
/// when it cannot be determined
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_source_is_under_program_dir() {
        let config = Config::default();
        assert_eq!(
            config.source_path(Path::new("/opt/cleaner")),
            PathBuf::from("/opt/cleaner/data/raw/patients.json")
        );
        assert_eq!(
            config.source_path(Path::new("")),
            PathBuf::from("data/raw/patients.json")
        );
    }

    #[test]
    fn program_dir_is_the_executable_parent() {
        let exe = std::env::current_exe().unwrap();
        let dir = program_dir();
        assert_eq!(Some(dir.as_path()), exe.parent());
        assert_eq!(
            Config::default().source_path(&dir),
            exe.parent().unwrap().join("data/raw/patients.json")
        );
    }

    #[test]
    fn loads_source_path_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaner.toml");
        fs::write(&path, "[source]\npath = \"inputs/today.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.source_path(Path::new("/base")),
            PathBuf::from("/base/inputs/today.json")
        );
    }

    #[test]
    fn absolute_source_path_is_used_as_is() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("p.json");
        let config = Config {
            source: SourceConfig {
                path: Some(source.clone()),
            },
        };
        assert_eq!(config.source_path(Path::new("/elsewhere")), source);
    }

    #[test]
    fn empty_file_means_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaner.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.source.path.is_none());
    }

    #[test]
    fn unknown_options_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaner.toml");
        fs::write(&path, "[source]\nmin_age = 21\n").unwrap();

        assert!(matches!(Config::load(&path), Err(CleanerError::Toml(_))));
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_or_default(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CleanerError::Config(_)));
        assert!(Config::load_or_default(None).unwrap().source.path.is_none());
    }
}
