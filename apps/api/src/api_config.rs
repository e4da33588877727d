use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use essentials_application::{DEFAULT_LOOKBACK_DAYS, DateRangeFilterConfig};
use essentials_core::AppError;
use essentials_domain::{DEFAULT_DATE_PATTERNS, DEFAULT_RANGE_SEPARATOR, DateRangeFormat};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub cookie_secure: bool,
    pub dev_seed: bool,
    pub date_range: DateRangeFilterConfig,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_source(source: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = source("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match source("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };
        let cookie_secure = flag(&source, "SESSION_COOKIE_SECURE");
        let dev_seed = flag(&source, "DEV_SEED");

        let patterns = source("DATE_RANGE_FORMATS")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                value
                    .split(';')
                    .map(str::trim)
                    .filter(|pattern| !pattern.is_empty())
                    .map(ToOwned::to_owned)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|| {
                DEFAULT_DATE_PATTERNS
                    .iter()
                    .map(|pattern| (*pattern).to_owned())
                    .collect()
            });
        let separator = source("DATE_RANGE_SEPARATOR")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_RANGE_SEPARATOR.to_owned());
        let format = DateRangeFormat::new(patterns, separator)
            .map_err(|error| AppError::Validation(format!("invalid date range configuration: {error}")))?;

        let default_lookback_days = match source("DATE_RANGE_DEFAULT_LOOKBACK_DAYS") {
            Some(value) => value.trim().parse::<u32>().map_err(|error| {
                AppError::Validation(format!("invalid DATE_RANGE_DEFAULT_LOOKBACK_DAYS: {error}"))
            })?,
            None => DEFAULT_LOOKBACK_DAYS,
        };

        Ok(Self {
            api_host,
            api_port,
            cookie_secure,
            dev_seed,
            date_range: DateRangeFilterConfig {
                format,
                default_lookback_days,
            },
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn flag(source: &impl Fn(&str) -> Option<String>, name: &str) -> bool {
    source(name)
        .unwrap_or_else(|| "false".to_owned())
        .eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use essentials_application::DEFAULT_LOOKBACK_DAYS;

    use super::ApiConfig;

    fn config(values: &[(&str, &str)]) -> Result<ApiConfig, essentials_core::AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_source(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]);
        assert!(config.is_ok());
        let Ok(config) = config else { return };

        assert_eq!(config.api_port, 3001);
        assert!(!config.dev_seed);
        assert_eq!(config.date_range.default_lookback_days, DEFAULT_LOOKBACK_DAYS);
        assert_eq!(config.date_range.format.separator(), " - ");
        assert_eq!(
            config.socket_address().map(|address| address.to_string()).ok(),
            Some("127.0.0.1:3001".to_owned())
        );
    }

    #[test]
    fn date_range_settings_are_read() {
        let config = config(&[
            ("DATE_RANGE_FORMATS", "%Y-%m-%d; %d/%m/%Y"),
            ("DATE_RANGE_SEPARATOR", " to "),
            ("DATE_RANGE_DEFAULT_LOOKBACK_DAYS", "30"),
            ("DEV_SEED", "TRUE"),
        ]);
        assert!(config.is_ok());
        let Ok(config) = config else { return };

        assert_eq!(
            config.date_range.format.patterns(),
            ["%Y-%m-%d".to_owned(), "%d/%m/%Y".to_owned()]
        );
        assert_eq!(config.date_range.format.separator(), " to ");
        assert_eq!(config.date_range.default_lookback_days, 30);
        assert!(config.dev_seed);
    }

    #[test]
    fn invalid_values_fail_startup() {
        assert!(config(&[("API_PORT", "not-a-port")]).is_err());
        assert!(config(&[("DATE_RANGE_DEFAULT_LOOKBACK_DAYS", "-1")]).is_err());
        assert!(config(&[("DATE_RANGE_FORMATS", "%Y-%!")]).is_err());
        assert!(config(&[("DATE_RANGE_FORMATS", "%Y-%m-%d %H:%M")]).is_err());
    }
}
