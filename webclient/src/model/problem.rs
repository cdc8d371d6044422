use std::fmt;

use serde::{Deserialize, Serialize};

use super::{nullable, Identifier};
use crate::{
    resource::impl_resource,
    util::{write_fields, DisplayList},
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Problem {
    pub id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub label: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub ordinal: i32,
}

impl_resource!(Problem, "problems", "problem");

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "label" => self.label,
            "name" => self.name,
            "ordinal" => self.ordinal,
        )
    }
}

/// Programming language accepted for submissions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub entry_point_required: bool,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub entry_point_name: String,
    #[serde(deserialize_with = "nullable")]
    pub extensions: Vec<String>,
}

impl_resource!(Language, "languages", "language");

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "name" => self.name,
            "entry point required" => self.entry_point_required,
            "entry point name" => self.entry_point_name,
            "extensions" => DisplayList(&self.extensions),
        )
    }
}

/// Possible verdict, e.g. "AC" or "WA".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgementType {
    pub id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub penalty: bool,
    pub solved: bool,
}

impl_resource!(JudgementType, "judgement-types", "judgement type");

impl fmt::Display for JudgementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "name" => self.name,
            "penalty" => self.penalty,
            "solved" => self.solved,
        )
    }
}
