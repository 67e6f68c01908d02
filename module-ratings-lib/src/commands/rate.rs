use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::checks::CheckContext;
use crate::facts::RepoSlug;
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::bail;

#[derive(Parser, Debug)]
pub struct RateArgs {
    /// Repositories to rate (format: `owner/repo` or a repository URL)
    #[arg(value_name = "SLUG")]
    pub slugs: Vec<RepoSlug>,

    /// Local checkout of the repository, inspected by the file-based checks
    #[arg(long, short = 'd', value_name = "PATH")]
    pub dir: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Pair each requested repository with the directory it should be inspected in.
fn contexts(args: &RateArgs) -> Result<Vec<CheckContext>> {
    match (args.slugs.as_slice(), &args.dir) {
        ([], None) => bail!("nothing to rate: pass at least one repository slug or --dir"),
        ([], Some(dir)) => Ok(vec![CheckContext::new(None, Some(dir.clone()))]),
        ([slug], dir) => Ok(vec![CheckContext::new(Some(slug.clone()), dir.clone())]),
        (_, Some(_)) => bail!("--dir can only be used when rating a single repository"),
        (slugs, None) => Ok(slugs.iter().map(|slug| CheckContext::new(Some(slug.clone()), None)).collect()),
    }
}

pub async fn rate_repositories<H: Host>(host: &mut H, args: &RateArgs) -> Result<()> {
    let contexts = contexts(args)?;
    let base_dir = args.dir.clone().unwrap_or_else(|| Utf8PathBuf::from("."));

    let mut common = Common::new(host, &args.common, &base_dir)?;
    let ratings = common.rate(&contexts).await;

    common.report(&ratings)
}
