pub mod account;
pub mod clarify;
pub mod contests;
pub mod get;
pub mod scoreboard;
pub mod state;
pub mod submit;

use anyhow::{ensure, Context as _};
use ccs_webclient::Session;

use crate::config::GlobalConfig;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    #[command(subcommand)]
    pub subcmd: Subcommand,

    /// API root, e.g. https://www.domjudge.org/demoweb/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub user: Option<String>,

    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Contest id to work on
    #[arg(short, long, global = true)]
    pub contest: Option<String>,

    /// Do not verify the server's TLS certificate
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Contests(contests::Args),
    Get(get::Args),

    #[command(alias("sb"))]
    Scoreboard(scoreboard::Args),

    State(state::Args),
    Account(account::Args),
    Clarify(clarify::Args),

    #[command(alias("s"))]
    Submit(submit::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Contests(args) => contests::exec(args, self).await,
            Get(args) => get::exec(args, self).await,
            Scoreboard(args) => scoreboard::exec(args, self).await,
            State(args) => state::exec(args, self).await,
            Account(args) => account::exec(args, self).await,
            Clarify(args) => clarify::exec(args, self).await,
            Submit(args) => submit::exec(args, self).await,
        }
    }
}

/// Opens a session from the config file, environment and flags.
/// The session is bound if a contest was configured.
pub async fn open_session(global_args: &GlobalArgs) -> anyhow::Result<Session> {
    let cfg = GlobalConfig::load(global_args)?;
    ensure!(
        !cfg.base_url.is_empty(),
        "No API root given. Use '--base-url', CCS_BASE_URL or 'base_url' in {:?}",
        GlobalConfig::display_filepath()
    );
    Session::from_config(&cfg.into())
        .await
        .context("Failed to open session")
}

/// Like [`open_session`], but fails unless a contest was configured.
pub async fn open_contest_session(global_args: &GlobalArgs) -> anyhow::Result<Session> {
    let session = open_session(global_args).await?;
    ensure!(
        session.is_bound(),
        "No contest given. Use '--contest' or CCS_CONTEST"
    );
    Ok(session)
}
