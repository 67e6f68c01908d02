//! Command dispatch logic for module-ratings

use super::{InitArgs, RateArgs, ValidateArgs, init_config, rate_repositories, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "module-ratings", version, author, long_about = None)]
#[command(about = "Rate the quality of a software module repository")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: RatingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum RatingsSubcommand {
    /// Rate repositories and report their scores
    Rate(Box<RateArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        RatingsSubcommand::Rate(rate_args) => rate_repositories(host, rate_args).await,
        RatingsSubcommand::Init(init_args) => init_config(host, init_args),
        RatingsSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
