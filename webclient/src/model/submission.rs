use std::fmt;

use serde::{Deserialize, Serialize};

use super::{nullable, ApiRelTime, ApiTime, FileReference, Identifier, LocalFileReference};
use crate::{
    resource::{impl_resource, Submittable},
    util::write_fields,
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub id: Identifier,
    pub language_id: Identifier,
    #[serde(skip_serializing_if = "ApiTime::is_zero")]
    pub time: ApiTime,
    #[serde(skip_serializing_if = "ApiRelTime::is_zero")]
    pub contest_time: ApiRelTime,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub team_id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub problem_id: Identifier,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub entry_point: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileReference>,
}

impl_resource!(Submission, "submissions", "submission");

impl Submittable for Submission {}

impl Submission {
    /// Builds a submission body carrying `files` as a single ZIP attachment.
    pub fn new(
        problem_id: impl Into<Identifier>,
        language_id: impl Into<Identifier>,
        entry_point: impl Into<String>,
        files: LocalFileReference,
    ) -> Self {
        Self {
            problem_id: problem_id.into(),
            language_id: language_id.into(),
            entry_point: entry_point.into(),
            files: vec![FileReference::zip(files)],
            ..Default::default()
        }
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "language id" => self.language_id,
            "time" => self.time,
            "contest time" => self.contest_time,
            "team id" => self.team_id,
            "problem id" => self.problem_id,
            "entry point" => self.entry_point,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Judgement {
    pub id: Identifier,
    pub submission_id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub judgement_type_id: Identifier,
    pub start_time: ApiTime,
    pub start_contest_time: ApiRelTime,
    #[serde(skip_serializing_if = "ApiTime::is_zero")]
    pub end_time: ApiTime,
    #[serde(skip_serializing_if = "ApiRelTime::is_zero")]
    pub end_contest_time: ApiRelTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_run_time: Option<f64>,
}

impl_resource!(Judgement, "judgements", "judgement");

impl Judgement {
    /// A judgement without a verdict is still running.
    pub fn is_pending(&self) -> bool {
        self.judgement_type_id.is_empty()
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "submission id" => self.submission_id,
            "judgement type id" => self.judgement_type_id,
            "start contest time" => self.start_contest_time,
            "end contest time" => self.end_contest_time,
        )
    }
}
