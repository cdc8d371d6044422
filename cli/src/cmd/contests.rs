use anyhow::Context as _;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = super::open_session(global_args).await?;
    let contests = session.contests().await.context("Failed to list contests")?;
    util::print_list(&contests, global_args.json)
}
