//! `doubts` - questions students raise and alumni resolve.

use serde::{Deserialize, Serialize};

use super::{DoubtStatus, Relationship};

pub const COLUMNS: &[&str] = &[
    "assigned_alumni_id",
    "attachments",
    "created_at",
    "description",
    "domain_tags",
    "id",
    "rating",
    "rating_comment",
    "resolved_at",
    "status",
    "student_id",
    "title",
    "updated_at",
    "urgency",
];

pub const RELATIONSHIPS: &[Relationship] = &[
    Relationship::to_profiles("doubts_assigned_alumni_id_fkey", &["assigned_alumni_id"]),
    Relationship::to_profiles("doubts_student_id_fkey", &["student_id"]),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub assigned_alumni_id: Option<String>,
    pub attachments: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub description: String,
    pub domain_tags: Option<Vec<String>>,
    pub id: String,
    pub rating: Option<i32>,
    pub rating_comment: Option<String>,
    pub resolved_at: Option<String>,
    pub status: Option<DoubtStatus>,
    pub student_id: String,
    pub title: String,
    pub updated_at: Option<String>,
    pub urgency: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_alumni_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DoubtStatus>,
    pub student_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub assigned_alumni_id: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub attachments: Option<Option<Vec<String>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub created_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub domain_tags: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub rating: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub rating_comment: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub resolved_at: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub status: Option<Option<DoubtStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub updated_at: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub urgency: Option<Option<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_can_clear_an_assignment() {
        let update = Update {
            assigned_alumni_id: Some(None),
            status: Some(Some(DoubtStatus::Open)),
            ..Update::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "assigned_alumni_id": null, "status": "open" })
        );
    }

    #[test]
    fn update_keeps_null_apart_from_absent() {
        let update = Update {
            assigned_alumni_id: Some(None),
            rating: Some(Some(5)),
            ..Update::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        let back: Update = serde_json::from_str(&json).unwrap();
        assert_eq!(back, update);
        assert_eq!(back.resolved_at, None);

        let cleared: Update = serde_json::from_str(r#"{ "rating_comment": null }"#).unwrap();
        assert_eq!(cleared.rating_comment, Some(None));
        assert_eq!(cleared.rating, None);
    }

    #[test]
    fn row_reads_null_arrays() {
        let row: Row = serde_json::from_value(serde_json::json!({
            "assigned_alumni_id": null,
            "attachments": null,
            "created_at": "2024-11-01T10:00:00+00:00",
            "description": "How do I prepare for system design rounds?",
            "domain_tags": ["interviews", "backend"],
            "id": "d-1",
            "rating": null,
            "rating_comment": null,
            "resolved_at": null,
            "status": "in_progress",
            "student_id": "p-9",
            "title": "System design prep",
            "updated_at": null,
            "urgency": 3
        }))
        .unwrap();
        assert_eq!(row.status, Some(DoubtStatus::InProgress));
        assert_eq!(row.attachments, None);
        assert_eq!(row.domain_tags.as_deref().map(<[String]>::len), Some(2));
    }
}
