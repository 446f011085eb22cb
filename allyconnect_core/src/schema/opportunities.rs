//! `opportunities` - internships, jobs, volunteering and projects posted by alumni.

use serde::{Deserialize, Serialize};

use super::{OpportunityType, Relationship};

pub const COLUMNS: &[&str] = &[
    "alumni_id",
    "application_deadline",
    "company",
    "created_at",
    "description",
    "domain_tags",
    "id",
    "is_active",
    "location",
    "requirements",
    "title",
    "type",
    "updated_at",
];

pub const RELATIONSHIPS: &[Relationship] =
    &[Relationship::to_profiles("opportunities_alumni_id_fkey", &["alumni_id"])];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub alumni_id: String,
    pub application_deadline: Option<String>,
    pub company: String,
    pub created_at: Option<String>,
    pub description: String,
    pub domain_tags: Option<Vec<String>>,
    pub id: String,
    pub is_active: Option<bool>,
    pub location: Option<String>,
    pub requirements: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub alumni_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alumni_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub application_deadline: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
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
    pub is_active: Option<Option<bool>>,
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
    pub requirements: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<OpportunityType>,
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
    fn insert_requires_type_and_writes_it_as_type() {
        let insert = Insert {
            alumni_id: "p-1".into(),
            application_deadline: None,
            company: "TechCorp Solutions".into(),
            created_at: None,
            description: "Work on web applications.".into(),
            domain_tags: Some(vec!["react".into()]),
            id: None,
            is_active: None,
            location: Some("San Francisco, CA".into()),
            requirements: None,
            title: "Software Engineering Intern".into(),
            kind: OpportunityType::Internship,
            updated_at: None,
        };
        let json = serde_json::to_value(&insert).unwrap();
        assert_eq!(json["type"], "internship");
        assert!(json.get("kind").is_none());
        assert!(json.get("application_deadline").is_none());
    }
}
