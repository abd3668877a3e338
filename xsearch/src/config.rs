use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_FILENAME;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for xsearch.
    pub xsearch: XsearchConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for xsearch.
pub struct XsearchConfig {
    /// Spaces between report columns.
    pub padding: Option<usize>,
    /// Directory names to exclude from the walk.
    pub exclude_folders: Option<Vec<String>>,
}

impl Config {
    /// Loads configuration from the current directory upwards.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// CLI flags override whatever is found here; absence of a
    /// configuration file is not an error.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_path_no_config() {
        // Create an empty temp directory with no config files
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_path(dir.path());
        // Should return default config
        assert!(config.xsearch.padding.is_none());
        assert!(config.xsearch.exclude_folders.is_none());
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_load_from_path_xsearch_toml() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".xsearch.toml")).unwrap();
        writeln!(
            file,
            r#"[xsearch]
padding = 5
exclude_folders = ["fixtures"]
"#
        )
        .unwrap();

        let config = Config::load_from_path(dir.path());
        assert_eq!(config.xsearch.padding, Some(5));
        assert_eq!(
            config.xsearch.exclude_folders,
            Some(vec!["fixtures".to_owned()])
        );
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn test_load_from_path_traverses_up() {
        // Create nested directory structure
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("records");
        std::fs::create_dir_all(&nested).unwrap();

        // Put config in root
        let mut file = std::fs::File::create(dir.path().join(".xsearch.toml")).unwrap();
        writeln!(
            file,
            r"[xsearch]
padding = 1
"
        )
        .unwrap();

        // Load from nested path - should find config in parent
        let config = Config::load_from_path(&nested);
        assert_eq!(config.xsearch.padding, Some(1));
    }

    #[test]
    fn test_load_from_file_path() {
        let dir = TempDir::new().unwrap();
        let mut file = std::fs::File::create(dir.path().join(".xsearch.toml")).unwrap();
        writeln!(
            file,
            r"[xsearch]
padding = 2
"
        )
        .unwrap();

        // Create a file in the directory
        let xml_file = dir.path().join("a.xml");
        std::fs::write(&xml_file, "<r/>").unwrap();

        // Load from file path (not directory)
        let config = Config::load_from_path(&xml_file);
        assert_eq!(config.xsearch.padding, Some(2));
    }

    #[test]
    fn test_malformed_config_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".xsearch.toml"), "padding = [not toml").unwrap();

        let config = Config::load_from_path(dir.path());
        assert!(config.xsearch.padding.is_none());
    }
}
