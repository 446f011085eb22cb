//! `events` - community events hosted by alumni.

use serde::{Deserialize, Serialize};

use super::{EventStatus, Relationship};

pub const COLUMNS: &[&str] = &[
    "created_at",
    "current_attendees",
    "description",
    "event_date",
    "id",
    "image_url",
    "is_featured",
    "location",
    "max_attendees",
    "organizer_id",
    "status",
    "title",
    "updated_at",
];

pub const RELATIONSHIPS: &[Relationship] =
    &[Relationship::to_profiles("events_organizer_id_fkey", &["organizer_id"])];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub created_at: Option<String>,
    pub current_attendees: Option<i32>,
    pub description: String,
    pub event_date: String,
    pub id: String,
    pub image_url: Option<String>,
    pub is_featured: Option<bool>,
    pub location: Option<String>,
    pub max_attendees: Option<i32>,
    pub organizer_id: String,
    pub status: Option<EventStatus>,
    pub title: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_attendees: Option<i32>,
    pub description: String,
    pub event_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i32>,
    pub organizer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
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
    pub current_attendees: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub is_featured: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub location: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub max_attendees: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub status: Option<Option<EventStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub updated_at: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_round_trips_cleared_location() {
        let update = Update {
            location: Some(None),
            status: Some(Some(EventStatus::Cancelled)),
            ..Update::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "location": null, "status": "cancelled" })
        );
        let back: Update = serde_json::from_value(json).unwrap();
        assert_eq!(back, update);
    }

    #[test]
    fn insert_omits_database_defaults() {
        let insert = Insert {
            description: "Panel with alumni from top tech companies.".into(),
            event_date: "2024-11-15T18:00:00+00:00".into(),
            organizer_id: "p-1".into(),
            title: "Tech Career Panel Discussion".into(),
            max_attendees: Some(150),
            ..Insert::default()
        };
        let json = serde_json::to_value(&insert).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["description", "event_date", "max_attendees", "organizer_id", "title"]
        );
    }
}
