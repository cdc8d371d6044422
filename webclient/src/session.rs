use serde::Deserialize;
use url::Url;

use crate::{
    error::*,
    http::{self, Credentials},
    model::*,
    resource::Resource,
    util,
};

/// Settings needed to open a [`Session`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    pub base_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Contest to bind to. An empty id leaves the session unbound.
    #[serde(default)]
    pub contest: String,
    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,
}

impl SessionConfig {
    pub fn credentials(&self) -> Option<Credentials> {
        let c = Credentials::new(&self.username, &self.password);
        (!c.is_empty()).then_some(c)
    }
}

/// A connection to one CCS API root, optionally bound to a contest.
///
/// Cloning is cheap and clones share the underlying connection pool, so a
/// session can be handed to several tasks.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) http: http::Client,
    pub(crate) base_url: Url,
    pub(crate) contest_id: Option<Identifier>,
}

macro_rules! emit_resource_fns {
    ($list:ident, $by_id:ident, $t:ty, $plural:literal) => {
        pub async fn $list(&self) -> Result<Vec<$t>> {
            self.list::<$t>()
                .await
                .map_err(|p| Error::from(p).context(concat!("retrieve ", $plural)))
        }

        pub async fn $by_id(&self, id: &str) -> Result<$t> {
            self.get_by_id::<$t>(id)
                .await
                .map_err(|e| e.context(format!("retrieve {} '{}'", <$t as Resource>::NAME, id)))
        }
    };
}

impl Session {
    /// Opens an unbound session. Only contests can be queried until
    /// [`Session::to_contest`] is called.
    pub fn new(base_url: &str, credentials: Option<Credentials>, insecure: bool) -> Result<Self> {
        let base_url = util::normalize_base_url(base_url)?;
        let http = http::Client::new(credentials, insecure)?;
        Ok(Self {
            http,
            base_url,
            contest_id: None,
        })
    }

    /// Opens a session and binds it to `contest_id`, which must exist.
    pub async fn connect(
        base_url: &str,
        credentials: Option<Credentials>,
        contest_id: impl Into<Identifier>,
        insecure: bool,
    ) -> Result<Self> {
        Self::new(base_url, credentials, insecure)?
            .to_contest(contest_id)
            .await
    }

    pub async fn from_config(config: &SessionConfig) -> Result<Self> {
        let session = Self::new(&config.base_url, config.credentials(), config.insecure)?;
        if config.contest.is_empty() {
            return Ok(session);
        }
        session.to_contest(config.contest.as_str()).await
    }

    /// Returns a session bound to `contest_id`, after checking with the server
    /// that the contest exists. `self` is left untouched.
    pub async fn to_contest(&self, contest_id: impl Into<Identifier>) -> Result<Self> {
        let contest_id = contest_id.into();
        let contest: Contest = self
            .get_by_id(contest_id.as_str())
            .await
            .map_err(|e| e.context(format!("find contest '{}'", contest_id)))?;
        log::info!("Bound to contest '{}' ({})", contest.id, contest.name);

        Ok(Self {
            contest_id: Some(contest_id),
            ..self.clone()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn contest_id(&self) -> Option<&Identifier> {
        self.contest_id.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.contest_id.is_some()
    }

    /// The contest this session is bound to.
    pub async fn contest(&self) -> Result<Contest> {
        let Some(cid) = &self.contest_id else {
            return Err(Error::ContestNotBound { path: Contest::PATH });
        };
        self.contest_by_id(cid.as_str()).await
    }

    emit_resource_fns!(contests, contest_by_id, Contest, "contests");
    emit_resource_fns!(problems, problem_by_id, Problem, "problems");
    emit_resource_fns!(submissions, submission_by_id, Submission, "submissions");
    emit_resource_fns!(judgements, judgement_by_id, Judgement, "judgements");
    emit_resource_fns!(judgement_types, judgement_type_by_id, JudgementType, "judgement types");
    emit_resource_fns!(clarifications, clarification_by_id, Clarification, "clarifications");
    emit_resource_fns!(languages, language_by_id, Language, "languages");
    emit_resource_fns!(groups, group_by_id, Group, "groups");
    emit_resource_fns!(organizations, organization_by_id, Organization, "organizations");
    emit_resource_fns!(teams, team_by_id, Team, "teams");
    emit_resource_fns!(accounts, account_by_id, Account, "accounts");

    /// Account the session is authenticated as.
    pub async fn account(&self) -> Result<Account> {
        let url = self.contest_url("account", ["account"])?;
        self.fetch_one(&url)
            .await
            .map_err(|e| e.context("retrieve account"))
    }

    pub async fn scoreboard(&self) -> Result<Scoreboard> {
        self.get_by_id::<Scoreboard>("")
            .await
            .map_err(|e| e.context("retrieve scoreboard"))
    }

    pub async fn state(&self) -> Result<State> {
        self.get_by_id::<State>("")
            .await
            .map_err(|e| e.context("retrieve state"))
    }

    /// Asks the jury a question. An empty `problem_id` asks about the contest in general.
    pub async fn post_clarification(
        &self,
        problem_id: impl Into<Identifier>,
        text: impl Into<String>,
    ) -> Result<Clarification> {
        self.submit(&Clarification::new(problem_id, text)).await
    }

    pub async fn post_submission(
        &self,
        problem_id: impl Into<Identifier>,
        language_id: impl Into<Identifier>,
        entry_point: impl Into<String>,
        files: LocalFileReference,
    ) -> Result<Submission> {
        let s = Submission::new(problem_id, language_id, entry_point, files);
        log::debug!(
            "Submitting {} file(s) for problem '{}' in '{}'",
            s.files.len(),
            s.problem_id,
            s.language_id
        );
        self.submit(&s).await
    }
}
