use crate::error::{ChangelogError, Result};
use ghthanks::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GitHubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// `owner/name`, overrides `GITHUB_REPOSITORY` and the git remotes
    pub repository: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            repository: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChangelogConfig {
    #[serde(default = "default_thank_contributors")]
    pub thank_contributors: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            thank_contributors: default_thank_contributors(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_thank_contributors() -> bool {
    true
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_error = |message: String| ChangelogError::Config {
            path: path.display().to_string(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("ghchangelog.toml"))
            .unwrap_or_else(|| PathBuf::from("~/.config/ghchangelog.toml"))
    }

    /// Merge configuration with command line arguments
    pub fn merge_with_args(&self, args: &mut crate::cli::Args) {
        if args.api_url == DEFAULT_API_URL && self.github.api_url != DEFAULT_API_URL {
            args.api_url = self.github.api_url.clone();
        }

        if args.repository.is_none() {
            args.repository = self.github.repository.clone();
        }

        if !args.no_thanks && !self.changelog.thank_contributors {
            args.no_thanks = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use std::fs;
    use tempfile::tempdir;

    fn args() -> Args {
        Args {
            repository: None,
            api_url: DEFAULT_API_URL.to_string(),
            github_token: None,
            no_thanks: false,
            config: PathBuf::from(".config/ghchangelog.toml"),
            verbose: false,
        }
    }

    #[test]
    fn test_load_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("test.toml");

        let config_content = r#"
[github]
api_url = "https://github.example.com/api/v3"
repository = "meltano/sdk"

[changelog]
thank_contributors = false
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.github.api_url, "https://github.example.com/api/v3");
        assert_eq!(config.github.repository.as_deref(), Some("meltano/sdk"));
        assert!(!config.changelog.thank_contributors);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.repository, None);
        assert!(config.changelog.thank_contributors);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert!(config.changelog.thank_contributors);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("broken.toml");
        fs::write(&config_path, "[github\napi_url = 1").unwrap();

        match Config::load(&config_path) {
            Err(ChangelogError::Config { path, .. }) => {
                assert!(path.ends_with("broken.toml"));
            }
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_with_args() {
        let config: Config = toml::from_str(
            r#"
[github]
api_url = "https://github.example.com/api/v3"
repository = "meltano/sdk"

[changelog]
thank_contributors = false
"#,
        )
        .unwrap();

        let mut args = args();
        config.merge_with_args(&mut args);
        assert_eq!(args.api_url, "https://github.example.com/api/v3");
        assert_eq!(args.repository.as_deref(), Some("meltano/sdk"));
        assert!(args.no_thanks);
    }

    #[test]
    fn test_args_win_over_config() {
        let config: Config = toml::from_str(
            r#"
[github]
repository = "meltano/sdk"
"#,
        )
        .unwrap();

        let mut args = args();
        args.repository = Some("meltano/meltano".to_string());
        config.merge_with_args(&mut args);
        assert_eq!(args.repository.as_deref(), Some("meltano/meltano"));
        assert_eq!(args.api_url, DEFAULT_API_URL);
        assert!(!args.no_thanks);
    }
}
