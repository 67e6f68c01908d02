use super::Host;
use super::common::build_suite;
use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `ratings.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Load the configuration and make sure a suite can be built from it
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<usize> {
    let config = Config::load(base_dir, config_path)?;
    let suite = build_suite(&config)?;
    Ok(suite.checks().count())
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let base_dir = Utf8PathBuf::from(".");
    let config_path = args.config.as_ref();

    match validate_config_inner(&base_dir, config_path) {
        Ok(check_count) => {
            let _ = writeln!(host.output(), "Configuration file is valid ({check_count} check(s) enabled)");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using {} or the default configuration", super::config::CONFIG_FILE_NAME);
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
