use crate::core::client::API_KEY_ENV;
use crate::core::urls::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::domain::model::{QueryOptions, MAX_PER_PAGE};
use crate::utils::error::{PexelsError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub client: ClientConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PexelsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PexelsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PexelsAPIKey})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PexelsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_url("client.base_url", self.base_url())?;

        if let Some(var) = &self.client.api_key_env {
            validate_non_empty_string("client.api_key_env", var)?;
        }

        // 未被替換的 ${VAR} 代表環境變數不存在
        if let Some(key) = &self.client.api_key {
            if key.starts_with("${") && key.ends_with('}') {
                return Err(PexelsError::MissingApiKeyError {
                    var: key.trim_start_matches("${").trim_end_matches('}').to_string(),
                });
            }
            validate_non_empty_string("client.api_key", key)?;
        }

        if let Some(timeout) = self.client.timeout_seconds {
            validate_positive_number("client.timeout_seconds", timeout, 1)?;
        }

        if let Some(per_page) = self.defaults.per_page {
            validate_range("defaults.per_page", per_page, 1, MAX_PER_PAGE)?;
        }

        if let Some(page) = self.defaults.page {
            validate_positive_number("defaults.page", page as u64, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.client.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn api_key(&self) -> Option<&str> {
        self.client.api_key.as_deref()
    }

    fn api_key_env(&self) -> &str {
        self.client.api_key_env.as_deref().unwrap_or(API_KEY_ENV)
    }

    fn timeout(&self) -> Option<Duration> {
        self.client.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> Option<&str> {
        self.client.user_agent.as_deref()
    }

    fn default_options(&self) -> QueryOptions {
        QueryOptions::new(self.defaults.per_page, self.defaults.page)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[client]
base_url = "http://localhost:8080/v1/"
api_key_env = "MY_PEXELS_KEY"
timeout_seconds = 10
user_agent = "pexels-client-test"

[defaults]
per_page = 40
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "http://localhost:8080/v1/");
        assert_eq!(config.api_key_env(), "MY_PEXELS_KEY");
        assert_eq!(config.api_key(), None);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.user_agent(), Some("pexels-client-test"));
        assert_eq!(config.default_options(), QueryOptions::new(Some(40), None));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key_env(), "PexelsAPIKey");
        assert_eq!(config.timeout(), None);
        assert!(config.default_options().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PEXELS_CLIENT_TOML_TEST_KEY", "abc123");

        let toml_content = r#"
[client]
api_key = "${PEXELS_CLIENT_TOML_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), Some("abc123"));

        std::env::remove_var("PEXELS_CLIENT_TOML_TEST_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[client]
api_key = "${PEXELS_CLIENT_TOML_NEVER_SET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PexelsError::MissingApiKeyError { var }) if var == "PEXELS_CLIENT_TOML_NEVER_SET"
        ));
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[client]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_page_size = TomlConfig::from_toml_str("[defaults]\nper_page = 500\n").unwrap();
        assert!(bad_page_size.validate().is_err());

        let bad_timeout = TomlConfig::from_toml_str("[client]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[client\nbase_url = 1").unwrap_err();
        assert!(matches!(err, PexelsError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[client]\nbase_url = \"https://api.example.com/v1\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_url(), "https://api.example.com/v1");
    }
}
