use super::{DEFAULT_BASE_PATH, DEFAULT_BIND};
use crate::domain::ports::{ConfigProvider, StorageSettings};
use crate::utils::error::{CouponError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub storage: Option<StorageConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
    pub base_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub r#type: String,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CouponError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CouponError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GATEWAY_URL})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CouponError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 取得日誌等級 (取代預設 filter)
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> Result<Option<LogFormat>> {
        let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) else {
            return Ok(None);
        };

        format
            .parse()
            .map(Some)
            .map_err(|reason| CouponError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: format.to_string(),
                reason,
            })
    }

    fn storage_type(&self) -> &str {
        self.storage
            .as_ref()
            .map(|s| s.r#type.as_str())
            .unwrap_or("memory")
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        self.server.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    fn base_path(&self) -> &str {
        self.server.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH)
    }

    fn gateway_url(&self) -> &str {
        &self.gateway.url
    }

    fn storage(&self) -> StorageSettings {
        match (self.storage_type(), self.storage.as_ref()) {
            ("file", Some(storage)) => StorageSettings::File {
                path: storage.path.clone().unwrap_or_default(),
            },
            _ => StorageSettings::Memory,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind", self.bind_address())?;
        validation::validate_base_path("server.base_path", self.base_path())?;
        validation::validate_url("gateway.url", &self.gateway.url)?;

        match self.storage_type() {
            "memory" => {}
            "file" => {
                let storage = validation::validate_required_field("storage", &self.storage)?;
                let path = validation::validate_required_field("storage.path", &storage.path)?;
                validation::validate_path("storage.path", path)?;
            }
            other => {
                return Err(CouponError::InvalidConfigValueError {
                    field: "storage.type".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported storage type. Valid types: memory, file".to_string(),
                })
            }
        }

        if let Some(level) = self.log_level() {
            validation::validate_non_empty_string("logging.level", level)?;
        }
        self.log_format()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8081"
base_path = "/cupones"

[gateway]
url = "http://gateway.local/api/proxy/cupones"

[storage]
type = "file"
path = "./data/cupones.json"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8081");
        assert_eq!(config.base_path(), "/cupones");
        assert_eq!(config.gateway_url(), "http://gateway.local/api/proxy/cupones");
        assert_eq!(
            config.storage(),
            StorageSettings::File {
                path: "./data/cupones.json".to_string()
            }
        );
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format().unwrap(), Some(LogFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let toml_content = r#"
[gateway]
url = "http://localhost:8888/api/proxy/cupones"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), DEFAULT_BIND);
        assert_eq!(config.base_path(), DEFAULT_BASE_PATH);
        assert_eq!(config.storage(), StorageSettings::Memory);
        assert_eq!(config.log_format().unwrap(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_COUPON_GATEWAY_URL", "https://gateway.test.com/cupones");

        let toml_content = r#"
[gateway]
url = "${TEST_COUPON_GATEWAY_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.gateway_url(), "https://gateway.test.com/cupones");

        std::env::remove_var("TEST_COUPON_GATEWAY_URL");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let toml_content = r#"
[gateway]
url = "${COUPON_SERVICE_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.gateway_url(), "${COUPON_SERVICE_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_storage_requires_path() {
        let toml_content = r#"
[gateway]
url = "http://localhost:8888/api/proxy/cupones"

[storage]
type = "file"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CouponError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unknown_storage_type_is_rejected() {
        let toml_content = r#"
[gateway]
url = "http://localhost:8888/api/proxy/cupones"

[storage]
type = "postgres"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(CouponError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_base_path_with_route_pattern_is_rejected() {
        let toml_content = r#"
[server]
base_path = "/api/{tenant}/cupones"

[gateway]
url = "http://localhost:8888/api/proxy/cupones"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_missing_gateway_section_fails_parsing() {
        let result = TomlConfig::from_toml_str("[server]\nbind = \"127.0.0.1:8080\"\n");
        assert!(matches!(
            result,
            Err(CouponError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
bind = "127.0.0.1:0"

[gateway]
url = "https://api.example.com/cupones"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:0");
        assert_eq!(config.gateway_url(), "https://api.example.com/cupones");
    }
}
