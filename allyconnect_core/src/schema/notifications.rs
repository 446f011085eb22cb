//! `notifications` - per-profile notification feed.

use serde::{Deserialize, Serialize};

use super::{Json, Relationship};

pub const COLUMNS: &[&str] = &[
    "created_at",
    "data",
    "id",
    "message",
    "read",
    "title",
    "type",
    "user_id",
];

pub const RELATIONSHIPS: &[Relationship] =
    &[Relationship::to_profiles("notifications_user_id_fkey", &["user_id"])];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub created_at: Option<String>,
    pub data: Option<Json>,
    pub id: String,
    pub message: String,
    pub read: Option<bool>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub created_at: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub data: Option<Option<Json>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub read: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_column_maps_to_kind() {
        let row: Row = serde_json::from_value(serde_json::json!({
            "created_at": null,
            "data": { "event_id": "e-1" },
            "id": "n-1",
            "message": "Your registration is confirmed",
            "read": false,
            "title": "Registered",
            "type": "event_registration",
            "user_id": "p-2"
        }))
        .unwrap();
        assert_eq!(row.kind, "event_registration");
        assert_eq!(row.data.unwrap()["event_id"], "e-1");

        let update = Update {
            kind: Some("reminder".into()),
            ..Update::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "type": "reminder" })
        );
    }
}
