use crate::Result;
use crate::facts::coverage::codecov::CODECOV_BASE_URL;
use crate::facts::coverage::scrutinizer::SCRUTINIZER_BASE_URL;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File name looked up in the base directory when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "ratings.toml";

const GOOD_COVERAGE_THRESHOLD: i64 = 40;
const GREAT_COVERAGE_THRESHOLD: i64 = 75;

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Score at or above which a repository is rated fair (0..100)
    #[serde(default = "default_fair_threshold")]
    pub fair_threshold: f64,

    /// Score at or above which a repository is rated good (0..100)
    #[serde(default = "default_good_threshold")]
    pub good_threshold: f64,

    /// Timeout applied to each HTTP request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub checks: ChecksConfig,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    #[serde(default = "default_codecov_url")]
    pub codecov_url: String,

    #[serde(default = "default_scrutinizer_url")]
    pub scrutinizer_url: String,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    #[serde(default)]
    pub good_code_coverage: CoverageCheckConfig,

    #[serde(default)]
    pub great_code_coverage: CoverageCheckConfig,

    #[serde(default)]
    pub license: CheckConfig,

    #[serde(default)]
    pub ci_config: CheckConfig,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_points")]
    pub points: u32,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageCheckConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_points")]
    pub points: u32,

    /// Coverage percentage required to pass; any integer is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

const fn default_fair_threshold() -> f64 {
    40.0
}

const fn default_good_threshold() -> f64 {
    75.0
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_codecov_url() -> String {
    CODECOV_BASE_URL.to_string()
}

fn default_scrutinizer_url() -> String {
    SCRUTINIZER_BASE_URL.to_string()
}

const fn default_enabled() -> bool {
    true
}

const fn default_points() -> u32 {
    5
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            codecov_url: default_codecov_url(),
            scrutinizer_url: default_scrutinizer_url(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            points: default_points(),
        }
    }
}

impl Default for CoverageCheckConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            points: default_points(),
            threshold: None,
        }
    }
}

impl ChecksConfig {
    #[must_use]
    pub fn good_code_coverage_threshold(&self) -> i64 {
        self.good_code_coverage.threshold.unwrap_or(GOOD_COVERAGE_THRESHOLD)
    }

    #[must_use]
    pub fn great_code_coverage_threshold(&self) -> i64 {
        self.great_code_coverage.threshold.unwrap_or(GREAT_COVERAGE_THRESHOLD)
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `ratings.toml` in `base_dir` is used if it exists.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.fair_threshold) {
            return Err(app_err!("fair_threshold must be between 0 and 100, got {}", self.fair_threshold));
        }

        if !(0.0..=100.0).contains(&self.good_threshold) {
            return Err(app_err!("good_threshold must be between 0 and 100, got {}", self.good_threshold));
        }

        if self.fair_threshold >= self.good_threshold {
            return Err(app_err!(
                "fair_threshold ({}) must be less than good_threshold ({})",
                self.fair_threshold,
                self.good_threshold
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
