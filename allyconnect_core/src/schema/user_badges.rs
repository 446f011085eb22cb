//! `user_badges` - badges earned by profiles.

use serde::{Deserialize, Serialize};

use super::Relationship;

pub const COLUMNS: &[&str] = &["badge_id", "earned_at", "id", "user_id"];

pub const RELATIONSHIPS: &[Relationship] = &[
    Relationship {
        foreign_key_name: "user_badges_badge_id_fkey",
        columns: &["badge_id"],
        is_one_to_one: false,
        referenced_relation: "badges",
        referenced_columns: &["id"],
    },
    Relationship::to_profiles("user_badges_user_id_fkey", &["user_id"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub badge_id: String,
    pub earned_at: Option<String>,
    pub id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub badge_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub earned_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
