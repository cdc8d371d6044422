use std::path::PathBuf;

use anyhow::{ensure, Context as _};
use ccs_webclient::LocalFileReference;
use colored::Colorize;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(short, long)]
    pub problem: String,

    #[arg(short, long)]
    pub language: String,

    /// Main class or file, for languages that need one
    #[arg(short, long, default_value = "")]
    pub entry_point: String,

    #[arg(required = true)] // positional argument
    pub files: Vec<PathBuf>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let bundle = collect_files(&args.files)?;
    let session = super::open_contest_session(global_args).await?;

    let lang = session
        .language_by_id(&args.language)
        .await
        .with_context(|| format!("Unknown language '{}'", args.language))?;
    ensure!(
        !lang.entry_point_required || !args.entry_point.is_empty(),
        "Language '{}' requires '--entry-point'",
        lang.name
    );

    let sub = session
        .post_submission(
            args.problem.as_str(),
            args.language.as_str(),
            args.entry_point.as_str(),
            bundle,
        )
        .await
        .context("Failed to submit")?;

    if global_args.json {
        return util::print_one(&sub, true);
    }
    println!(
        "{}",
        format!(
            "Successfully submitted {} file(s) to problem '{}'",
            args.files.len(),
            args.problem
        )
        .green()
    );
    println!("Submission id: {}", sub.id.to_string().cyan());
    Ok(())
}

fn collect_files(paths: &[PathBuf]) -> anyhow::Result<LocalFileReference> {
    let mut bundle = LocalFileReference::new();
    for path in paths {
        bundle
            .add_file(path)
            .with_context(|| format!("Failed to read {:?}", util::replace_homedir_to_tilde(path)))?;
    }
    Ok(bundle)
}
