#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::users_api::DEFAULT_USERS_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::{DEFAULT_DIRECTIVE, VERBOSE_DIRECTIVE};
use crate::utils::validation::{
    validate_bind_addr, validate_log_level, validate_range, validate_url, Validate,
};
use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_IMPORT_TIMEOUT_SECS: u64 = 10;
pub const MAX_IMPORT_TIMEOUT_SECS: u64 = 300;

/// Fully resolved runtime settings: defaults, then the config file, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    pub users_endpoint: String,
    pub import_timeout_secs: u64,
    pub import_enabled: bool,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            import_timeout_secs: DEFAULT_IMPORT_TIMEOUT_SECS,
            import_enabled: true,
            log_level: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    /// 以設定檔中有出現的值覆蓋目前設定
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(bind) = file.bind() {
            self.bind = bind.to_string();
        }
        if let Some(endpoint) = file.users_endpoint() {
            self.users_endpoint = endpoint.to_string();
        }
        if let Some(timeout) = file.import_timeout_secs() {
            self.import_timeout_secs = timeout;
        }
        if let Some(enabled) = file.import_enabled() {
            self.import_enabled = enabled;
        }
        if let Some(level) = file.log_level() {
            self.log_level = Some(level.to_string());
        }
        if let Some(json) = file.json_logs() {
            self.json_logs = json;
        }
        self
    }

    /// Default `EnvFilter` directive; `RUST_LOG` still takes precedence.
    pub fn log_directive(&self) -> String {
        if self.verbose {
            return VERBOSE_DIRECTIVE.to_string();
        }
        match &self.log_level {
            Some(level) => format!("contacts_board={}", level),
            None => DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl ConfigProvider for Settings {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn users_endpoint(&self) -> &str {
        &self.users_endpoint
    }

    fn import_timeout_secs(&self) -> u64 {
        self.import_timeout_secs
    }

    fn import_enabled(&self) -> bool {
        self.import_enabled
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_bind_addr("server.bind", &self.bind)?;
        if self.import_enabled {
            validate_url("import.endpoint", &self.users_endpoint)?;
        }
        validate_range(
            "import.timeout_seconds",
            self.import_timeout_secs,
            1,
            MAX_IMPORT_TIMEOUT_SECS,
        )?;
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bind_addr(), DEFAULT_BIND);
        assert_eq!(settings.log_directive(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file = TomlConfig::from_toml_str(
            r#"
[import]
endpoint = "http://localhost:8080/users"
enabled = false

[logging]
level = "trace"
"#,
        )
        .unwrap();

        let settings = Settings::default().merge_file(&file);

        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.users_endpoint(), "http://localhost:8080/users");
        assert!(!settings.import_enabled());
        assert_eq!(settings.log_directive(), "contacts_board=trace");
    }

    #[test]
    fn test_verbose_wins_over_level() {
        let settings = Settings {
            verbose: true,
            log_level: Some("warn".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.log_directive(), VERBOSE_DIRECTIVE);
    }

    #[test]
    fn test_validation_failures() {
        let bad_bind = Settings {
            bind: "localhost".to_string(),
            ..Settings::default()
        };
        assert!(bad_bind.validate().is_err());

        let bad_timeout = Settings {
            import_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(bad_timeout.validate().is_err());

        let bad_endpoint = Settings {
            users_endpoint: "ftp://example.com/users".to_string(),
            ..Settings::default()
        };
        assert!(bad_endpoint.validate().is_err());

        let typo_level = Settings {
            log_level: Some("verbos".to_string()),
            ..Settings::default()
        };
        assert!(matches!(
            typo_level.validate(),
            Err(crate::utils::error::ContactsError::InvalidConfigValueError { ref field, .. })
                if field == "logging.level"
        ));

        // endpoint is irrelevant when the import is skipped
        let skipped = Settings {
            users_endpoint: String::new(),
            import_enabled: false,
            ..Settings::default()
        };
        assert!(skipped.validate().is_ok());
    }
}
