use crate::config::types::Config;
use crate::{ConfigError, ConfigResult};
use std::time::Duration;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_http_url("start-url", &config.start_url)?;
    validate_http_url("root", &config.root)?;
    validate_timing(config)?;

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a configured URL is absolute and uses HTTP(S)
fn validate_http_url(key: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            key, value
        )));
    }

    Ok(())
}

fn validate_timing(config: &Config) -> ConfigResult<()> {
    if Duration::try_from_secs_f64(config.delay).is_err() {
        return Err(ConfigError::Validation(format!(
            "delay must be a non-negative number of seconds, got {}",
            config.delay
        )));
    }

    if config.timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout must be >= 1 second, got {}",
            config.timeout
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_urls() {
        assert!(validate_http_url("root", "https://example.com/docs/").is_ok());
        assert!(validate_http_url("root", "http://127.0.0.1:8080/").is_ok());

        assert!(validate_http_url("root", "").is_err());
        assert!(validate_http_url("root", "/docs/").is_err());
        assert!(validate_http_url("root", "ftp://example.com/docs/").is_err());
    }

    #[test]
    fn test_validate_delay() {
        let mut config = Config::default();
        config.delay = -1.0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        config.delay = f64::NAN;
        assert!(validate(&config).is_err());

        config.delay = f64::INFINITY;
        assert!(validate(&config).is_err());

        config.delay = 1e20;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        config.delay = 1.5;
        assert!(validate(&config).is_ok());

        config.delay = 0.0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_user_agent() {
        let mut config = Config::default();
        config.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }
}
