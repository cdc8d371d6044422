use std::fmt;

use serde::{Deserialize, Serialize};

use super::{nullable, Identifier};
use crate::{
    resource::impl_resource,
    util::{write_fields, DisplayList},
};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: Identifier,
    pub icpc_id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    pub hidden: bool,
}

impl_resource!(Group, "groups", "group");

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "name" => self.name,
            "type" => self.kind,
            "hidden" => self.hidden,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: Identifier,
    pub icpc_id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub formal_name: String,
    #[serde(deserialize_with = "nullable")]
    pub country: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub twitter_hashtag: String,
}

impl_resource!(Organization, "organizations", "organization");

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "name" => self.name,
            "formal name" => self.formal_name,
            "country" => self.country,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: Identifier,
    pub icpc_id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub display_name: String,
    #[serde(deserialize_with = "nullable")]
    pub group_ids: Vec<Identifier>,
    pub organization_id: Identifier,
}

impl_resource!(Team, "teams", "team");

impl Team {
    /// `display_name` if the server set one, `name` otherwise.
    pub fn shown_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "name" => self.name,
            "display name" => self.display_name,
            "group ids" => DisplayList(&self.group_ids),
            "organization id" => self.organization_id,
        )
    }
}

/// Login account, e.g. a team or jury member.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: Identifier,
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub team_id: Identifier,
    #[serde(skip_serializing_if = "Identifier::is_empty")]
    pub person_id: Identifier,
}

impl_resource!(Account, "accounts", "account");

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_fields!(f,
            "id" => self.id,
            "username" => self.username,
            "type" => self.kind,
            "team id" => self.team_id,
        )
    }
}
