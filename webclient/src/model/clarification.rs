use std::fmt;

use serde::{Deserialize, Serialize};

use super::{nullable, ApiRelTime, ApiTime, Identifier};
use crate::{
    resource::{impl_resource, Submittable},
    util::write_fields,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clarification {
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub from_team_id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub to_team_id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub reply_to_id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub problem_id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(skip_serializing_if = "ApiTime::is_zero")]
    pub time: ApiTime,
    #[serde(skip_serializing_if = "ApiRelTime::is_zero")]
    pub contest_time: ApiRelTime,
}

impl_resource!(Clarification, "clarifications", "clarification");

impl Submittable for Clarification {}

impl Clarification {
    /// Builds a question about `problem_id`. An empty id asks about the contest in general.
    pub fn new(problem_id: impl Into<Identifier>, text: impl Into<String>) -> Self {
        Self {
            problem_id: problem_id.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Clarifications without a sender come from the jury.
    pub fn is_from_jury(&self) -> bool {
        self.from_team_id.is_empty()
    }
}

impl fmt::Display for Clarification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "from team id" => self.from_team_id,
            "to team id" => self.to_team_id,
            "reply to id" => self.reply_to_id,
            "problem id" => self.problem_id,
            "text" => self.text,
            "time" => self.time,
            "contest time" => self.contest_time,
        )
    }
}
