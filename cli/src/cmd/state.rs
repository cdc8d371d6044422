use anyhow::Context as _;
use colored::Colorize;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = super::open_contest_session(global_args).await?;
    let state = session.state().await.context("Failed to get contest state")?;

    if !global_args.json {
        let label = if state.is_running() {
            "running".green()
        } else if state.started.is_zero() {
            "not started".yellow()
        } else {
            "ended".bright_red()
        };
        println!("Contest is {}", label);
    }
    util::print_one(&state, global_args.json)
}
