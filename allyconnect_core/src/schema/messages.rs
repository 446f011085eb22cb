//! `messages` - direct messages between profiles.

use serde::{Deserialize, Serialize};

use super::Relationship;

pub const COLUMNS: &[&str] = &[
    "attachments",
    "content",
    "created_at",
    "id",
    "read",
    "recipient_id",
    "sender_id",
];

pub const RELATIONSHIPS: &[Relationship] = &[
    Relationship::to_profiles("messages_recipient_id_fkey", &["recipient_id"]),
    Relationship::to_profiles("messages_sender_id_fkey", &["sender_id"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub attachments: Option<Vec<String>>,
    pub content: String,
    pub created_at: Option<String>,
    pub id: String,
    pub read: Option<bool>,
    pub recipient_id: String,
    pub sender_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    pub recipient_id: String,
    pub sender_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub attachments: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub created_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub read: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
}
