use std::fmt;

use serde::{Deserialize, Serialize};

use super::{nullable, ApiRelTime, ApiTime, Identifier, State};
use crate::{resource::impl_resource, util::write_fields};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    pub event_id: Identifier,
    pub time: ApiTime,
    pub contest_time: ApiRelTime,
    pub state: State,
    #[serde(deserialize_with = "nullable")]
    pub rows: Vec<Row>,
}

impl_resource!(Scoreboard, "scoreboard", "scoreboard", singleton);

impl Scoreboard {
    pub fn row_of(&self, team_id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub rank: u32,
    pub team_id: Identifier,
    pub score: Score,
    #[serde(deserialize_with = "nullable")]
    pub problems: Vec<ScoreProblem>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub num_solved: u32,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub total_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreProblem {
    pub problem_id: Identifier,
    pub num_judged: u32,
    pub num_pending: u32,
    pub solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub time: i64,
}

fn is_zero_u32(n: &u32) -> bool {
    *n == 0
}

fn is_zero_i64(n: &i64) -> bool {
    *n == 0
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "event id" => self.event_id,
            "time" => self.time,
            "contest time" => self.contest_time,
            "rows" => self.rows.len(),
        )?;
        for row in &self.rows {
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>4}  {:<12} solved {:>3}  time {:>5}  ",
            self.rank, self.team_id, self.score.num_solved, self.score.total_time
        )?;
        for p in &self.problems {
            write!(f, " {}", p)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "num solved" => self.num_solved,
            "total time" => self.total_time,
            "score" => self.score.unwrap_or_default(),
        )
    }
}

impl fmt::Display for ScoreProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mark = if self.solved {
            '+'
        } else if self.num_pending > 0 {
            '?'
        } else if self.num_judged > 0 {
            '-'
        } else {
            '.'
        };
        write!(f, "{}:{}{}", self.problem_id, mark, self.num_judged + self.num_pending)
    }
}
