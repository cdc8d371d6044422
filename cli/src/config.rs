use anyhow::Context as _;
use ccs_webclient::SessionConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use crate::{cmd::GlobalArgs, util};

pub const APP_NAME: &str = "ccs-cli";
pub const ENV_PREFIX: &str = "CCS_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub contest: String,
    pub insecure: bool,
}

/// Values taken from `CCS_*` variables. Unset ones keep the file's value.
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    contest: Option<String>,
    insecure: Option<bool>,
}

impl GlobalConfig {
    pub const FILENAME: &str = "ccs-cli.toml";

    pub fn filepath() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(Self::FILENAME))
    }

    pub fn display_filepath() -> PathBuf {
        Self::filepath()
            .map(util::replace_homedir_to_tilde)
            .unwrap_or_else(|| PathBuf::from(Self::FILENAME))
    }

    pub fn from_file_or_default() -> anyhow::Result<Self> {
        let Some(path) = Self::filepath() else {
            log::debug!("No user config dir, skipping {}", Self::FILENAME);
            return Ok(Self::default());
        };
        Self::from_path(&path)
    }

    /// Reads the config at `path`. Only a missing file yields the defaults.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let toml_str = match File::open(path).and_then(io::read_to_string) {
            Ok(toml) => toml,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Cannot read config '{:?}'", util::replace_homedir_to_tilde(path))
                })
            }
        };
        Self::from_toml(&toml_str).with_context(|| {
            format!(
                "Invalid config '{:?}'",
                util::replace_homedir_to_tilde(path)
            )
        })
    }

    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_env(self) -> anyhow::Result<Self> {
        let env = envy::prefixed(ENV_PREFIX)
            .from_env::<EnvOverrides>()
            .context("Invalid CCS_* environment variable")?;
        Ok(self.with_overrides(env))
    }

    fn with_overrides(mut self, env: EnvOverrides) -> Self {
        let EnvOverrides {
            base_url,
            username,
            password,
            contest,
            insecure,
        } = env;

        base_url.map(|v| self.base_url = v);
        username.map(|v| self.username = v);
        password.map(|v| self.password = v);
        contest.map(|v| self.contest = v);
        insecure.map(|v| self.insecure = v);
        self
    }

    pub fn with_args(mut self, args: &GlobalArgs) -> Self {
        let GlobalArgs {
            subcmd: _,
            base_url,
            user,
            password,
            contest,
            insecure,
            json: _,
            verbose: _,
        } = args;

        base_url.as_ref().map(|v| self.base_url = v.clone());
        user.as_ref().map(|v| self.username = v.clone());
        password.as_ref().map(|v| self.password = v.clone());
        contest.as_ref().map(|v| self.contest = v.clone());
        self.insecure |= insecure;
        self
    }

    /// File, then `CCS_*` environment, then command line flags.
    pub fn load(args: &GlobalArgs) -> anyhow::Result<Self> {
        Ok(Self::from_file_or_default()?.with_env()?.with_args(args))
    }
}

impl From<GlobalConfig> for SessionConfig {
    fn from(cfg: GlobalConfig) -> Self {
        SessionConfig {
            base_url: cfg.base_url,
            username: cfg.username,
            password: cfg.password,
            contest: cfg.contest,
            insecure: cfg.insecure,
        }
    }
}
