use anyhow::Context as _;
use ccs_webclient::{model::*, Resource, Session};
use serde::Serialize;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg()] // positional argument
    pub resource: ResourceKind,

    /// Fetch only the object with this id
    #[arg()]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, strum::Display)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceKind {
    Contests,
    Problems,
    Submissions,
    Judgements,
    JudgementTypes,
    Clarifications,
    Languages,
    Groups,
    Organizations,
    Teams,
    Accounts,
}

impl ResourceKind {
    pub fn is_contest_scoped(self) -> bool {
        self != ResourceKind::Contests
    }
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let session = if args.resource.is_contest_scoped() {
        super::open_contest_session(global_args).await?
    } else {
        super::open_session(global_args).await?
    };
    let id = args.id.as_deref();
    let json = global_args.json;

    use ResourceKind::*;
    match args.resource {
        Contests => show::<Contest>(&session, id, json).await,
        Problems => show::<Problem>(&session, id, json).await,
        Submissions => show::<Submission>(&session, id, json).await,
        Judgements => show::<Judgement>(&session, id, json).await,
        JudgementTypes => show::<JudgementType>(&session, id, json).await,
        Clarifications => show::<Clarification>(&session, id, json).await,
        Languages => show::<Language>(&session, id, json).await,
        Groups => show::<Group>(&session, id, json).await,
        Organizations => show::<Organization>(&session, id, json).await,
        Teams => show::<Team>(&session, id, json).await,
        Accounts => show::<Account>(&session, id, json).await,
    }
}

async fn show<R>(session: &Session, id: Option<&str>, json: bool) -> SubcmdResult
where
    R: Resource + Serialize,
{
    if let Some(id) = id {
        let x = session
            .get_by_id::<R>(id)
            .await
            .with_context(|| format!("Failed to retrieve {} '{}'", R::NAME, id))?;
        return util::print_one(&x, json);
    }

    match session.list::<R>().await {
        Ok(xs) => util::print_list(&xs, json),
        Err(partial) => {
            // show what could be decoded before reporting the failure
            util::print_list(&partial.decoded, json)?;
            Err(partial.error).with_context(|| format!("Failed to list {}s", R::NAME))
        }
    }
}
