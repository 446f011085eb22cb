//! `event_attendees` - registrations linking profiles to events.

use serde::{Deserialize, Serialize};

use super::Relationship;

pub const COLUMNS: &[&str] = &["event_id", "id", "registered_at", "user_id"];

pub const RELATIONSHIPS: &[Relationship] = &[
    Relationship {
        foreign_key_name: "event_attendees_event_id_fkey",
        columns: &["event_id"],
        is_one_to_one: false,
        referenced_relation: "events",
        referenced_columns: &["id"],
    },
    Relationship::to_profiles("event_attendees_user_id_fkey", &["user_id"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub event_id: String,
    pub id: String,
    pub registered_at: Option<String>,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub registered_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
