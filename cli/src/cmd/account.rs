use anyhow::Context as _;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = super::open_contest_session(global_args).await?;
    let account = session.account().await.context("Failed to get own account")?;
    util::print_one(&account, global_args.json)
}
