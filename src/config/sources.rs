use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "ARTIFACT_UPLOADER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "artifacts.yaml";
const ENV_PREFIX: &str = "ARTIFACT_UPLOADER";
const ENV_SEPARATOR: &str = "__";

/// Path of the configuration file when none is given explicitly
pub fn default_path() -> PathBuf {
    env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load configuration with priority:
/// 1. Defaults (embedded in structs)
/// 2. Configuration file (format picked from the extension)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    // Load .env file if it exists (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    load_from_sources(default_path())
}

/// Load configuration from a specific path and environment.
///
/// The file is required: a run without handlers has nothing to upload.
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    tracing::info!("Loading configuration from: {}", config_path.display());

    let builder = config::Config::builder()
        .add_source(File::from(config_path).required(true))
        // ARTIFACT_UPLOADER__TRACKING__DIR -> tracking.dir
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

    let config = builder.build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        assert!(load_from_sources(config_path).is_err());
    }

    #[test]
    fn test_load_from_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("artifacts.yaml");

        let yaml_content = r#"
artifacts:
  - name: handler1
    path: /path/to/source1
    destination: http://path/to/destination1
  - name: handler2
    path: /path/to/source2
    destination: http://path/to/destination1
    http-headers:
      accept: "text/json"
      authentication: "abc:123"
tracking:
  dir: /var/lib/uploads
"#;

        fs::write(&config_path, yaml_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.artifacts.len(), 2);
        assert_eq!(config.artifacts[0].name, "handler1");
        assert_eq!(config.artifacts[0].path, "/path/to/source1");
        assert!(config.artifacts[0].http_headers.is_empty());
        assert_eq!(config.artifacts[1].http_headers.len(), 2);
        assert_eq!(
            config.artifacts[1].http_headers.get("authentication").map(String::as_str),
            Some("abc:123")
        );
        assert_eq!(config.tracking.dir, PathBuf::from("/var/lib/uploads"));
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("artifacts.toml");

        let toml_content = r#"
[transfer]
insecure_tls = false
request_timeout_secs = 5

[[artifacts]]
name = "reports"
path = "target/reports/*.xml"
destination = "https://ci.internal/reports"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.artifacts.len(), 1);
        assert!(!config.transfer.insecure_tls);
        assert_eq!(config.transfer.request_timeout_secs, 5);
        assert_eq!(config.transfer.connect_timeout_secs, 10);
    }
}
