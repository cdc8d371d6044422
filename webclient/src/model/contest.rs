use std::fmt;

use serde::{Deserialize, Serialize};

use super::{nullable, ApiRelTime, ApiTime, Identifier};
use crate::{resource::impl_resource, util::write_fields};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contest {
    pub id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub formal_name: String,
    pub start_time: ApiTime,
    pub duration: ApiRelTime,
    #[serde(skip_serializing_if = "ApiRelTime::is_zero")]
    pub scoreboard_freeze_duration: ApiRelTime,
    #[serde(skip_serializing_if = "ApiRelTime::is_zero")]
    pub countdown_pause_time: ApiRelTime,
}

impl_resource!(Contest, "contests", "contest", top_level);

impl Contest {
    /// End of the contest, zero if the start time is unknown.
    pub fn end_time(&self) -> ApiTime {
        self.start_time.add(self.duration)
    }
}

impl fmt::Display for Contest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "name" => self.name,
            "formal name" => self.formal_name,
            "start time" => self.start_time,
            "duration" => self.duration,
        )
    }
}

/// Current state of a contest. Zero times have not happened yet.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    pub started: ApiTime,
    pub ended: ApiTime,
    pub frozen: ApiTime,
    #[serde(skip_serializing_if = "ApiTime::is_zero")]
    pub thawed: ApiTime,
    pub finalized: ApiTime,
    pub end_of_updates: ApiTime,
}

impl_resource!(State, "state", "state", singleton);

impl State {
    pub fn is_running(&self) -> bool {
        !self.started.is_zero() && self.ended.is_zero()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "started" => self.started,
            "ended" => self.ended,
            "frozen" => self.frozen,
            "thawed" => self.thawed,
            "finalized" => self.finalized,
            "end of updates" => self.end_of_updates,
        )
    }
}
