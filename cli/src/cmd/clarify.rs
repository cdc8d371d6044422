use anyhow::{ensure, Context as _};
use colored::Colorize;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Problem the question is about; omit for a general question
    #[arg(short, long)]
    pub problem: Option<String>,

    #[arg(required = true)] // positional argument
    pub text: Vec<String>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let text = args.text.join(" ");
    ensure!(!text.trim().is_empty(), "Clarification text is empty");

    let session = super::open_contest_session(global_args).await?;
    let problem = args.problem.as_deref().unwrap_or_default();
    let clar = session
        .post_clarification(problem, text)
        .await
        .context("Failed to send clarification")?;

    if global_args.json {
        return util::print_one(&clar, true);
    }
    println!(
        "{}",
        format!("Sent clarification request (id {})", clar.id).green()
    );
    Ok(())
}
