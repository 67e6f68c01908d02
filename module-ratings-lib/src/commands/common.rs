//! Shared setup for commands: logging, configuration, the check suite, and reporting.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::checks::{CheckContext, CiConfigCheck, CoverageCheck, LicenseCheck, Rating, Suite, Tier};
use crate::facts::coverage::{codecov, scrutinizer};
use crate::facts::http::build_client;
use crate::reports::{generate_console, generate_json};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Arguments controlling configuration, logging and report output
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file (default is `ratings.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Output ratings to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output ratings to the console. If omitted, console output is shown only when no other report is generated.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Exit with status code 1 if any repository is rated poor
    #[arg(long)]
    pub error_if_poor: bool,
}

pub struct Common<'a, H: Host> {
    pub suite: Suite,
    host: &'a mut H,
    color: ColorMode,
    console: bool,
    json: Option<Utf8PathBuf>,
    error_if_poor: bool,
}

impl<'a, H: Host> Common<'a, H> {
    /// Set up logging, load configuration from `base_dir` (or `--config`), and build the suite.
    pub fn new(host: &'a mut H, args: &CommonArgs, base_dir: &Utf8Path) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(base_dir, args.config.as_ref())?;
        let suite = build_suite(&config)?;

        Ok(Self {
            suite,
            host,
            color: args.color,
            console: args.console,
            json: args.json.clone(),
            error_if_poor: args.error_if_poor,
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // A logger may already be installed when several commands run in one process
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }

    pub async fn rate(&self, contexts: &[CheckContext]) -> Vec<Rating> {
        self.suite.rate_all(contexts).await
    }

    pub fn report(&mut self, ratings: &[Rating]) -> Result<()> {
        if self.console || self.json.is_none() {
            let use_colors = match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };

            let mut console_output = String::new();
            generate_console(ratings, use_colors, &mut console_output)?;
            let _ = write!(self.host.output(), "{console_output}");
        }

        if let Some(filename) = &self.json {
            let mut json_output = String::new();
            generate_json(ratings, Utc::now(), &mut json_output)?;
            fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
        }

        if self.error_if_poor && ratings.iter().any(|rating| rating.tier == Tier::Poor) {
            return Err(ohno::AppError::new("one or more repositories were rated poor"));
        }

        Ok(())
    }
}

/// Register the checks enabled in the configuration.
pub fn build_suite(config: &Config) -> Result<Suite> {
    let client = build_client(config.request_timeout)?;
    let codecov = codecov::Provider::new(client.clone(), Some(&config.providers.codecov_url));
    let scrutinizer = scrutinizer::Provider::new(client, Some(&config.providers.scrutinizer_url));

    let checks = &config.checks;
    let mut suite = Suite::new(config.fair_threshold, config.good_threshold);

    if checks.good_code_coverage.enabled {
        let threshold = checks.good_code_coverage_threshold();
        let _ = suite.add_check(
            CoverageCheck::new(
                "good_code_coverage",
                format!("Code coverage is at least {threshold}%"),
                checks.good_code_coverage.points,
                codecov.clone(),
                scrutinizer.clone(),
            )
            .with_threshold(threshold),
        );
    }

    if checks.great_code_coverage.enabled {
        let threshold = checks.great_code_coverage_threshold();
        let _ = suite.add_check(
            CoverageCheck::new(
                "great_code_coverage",
                format!("Code coverage is at least {threshold}%"),
                checks.great_code_coverage.points,
                codecov,
                scrutinizer,
            )
            .with_threshold(threshold),
        );
    }

    if checks.license.enabled {
        let _ = suite.add_check(LicenseCheck::new(checks.license.points));
    }

    if checks.ci_config.enabled {
        let _ = suite.add_check(CiConfigCheck::new(checks.ci_config.points));
    }

    Ok(suite)
}
