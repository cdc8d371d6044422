use anyhow::Context as _;
use colored::Colorize;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Show only this team's row
    #[arg(short, long)]
    pub team: Option<String>,
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = super::open_contest_session(global_args).await?;
    let sb = session.scoreboard().await.context("Failed to get scoreboard")?;

    if let Some(team) = &args.team {
        let row = sb
            .row_of(team)
            .with_context(|| format!("Team '{}' is not on the scoreboard", team))?;
        return util::print_one(row, global_args.json);
    }
    if global_args.json {
        return util::print_one(&sb, true);
    }

    println!(
        "{}",
        format!("Scoreboard at {} (contest time {})", sb.time, sb.contest_time).bold()
    );
    if sb.state.frozen.is_zero() || !sb.state.thawed.is_zero() {
        println!();
    } else {
        println!("{}", "Frozen".cyan());
    }
    for row in &sb.rows {
        print!("{}", row);
    }
    Ok(())
}
