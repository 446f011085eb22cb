//! `profiles` - one row per account, student, alumnus or admin.

use serde::{Deserialize, Serialize};

use super::{Relationship, UserRole};

pub const COLUMNS: &[&str] = &[
    "avatar_url",
    "bio",
    "created_at",
    "current_company",
    "department",
    "email",
    "enrollment_number",
    "full_name",
    "graduation_year",
    "headline",
    "id",
    "linkedin_url",
    "location",
    "phone",
    "points",
    "portfolio_url",
    "role",
    "updated_at",
    "user_id",
    "username",
    "verified",
];

pub const RELATIONSHIPS: &[Relationship] = &[];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: Option<String>,
    pub current_company: Option<String>,
    pub department: Option<String>,
    pub email: String,
    pub enrollment_number: Option<String>,
    pub full_name: String,
    pub graduation_year: Option<i32>,
    pub headline: Option<String>,
    pub id: String,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub points: Option<i32>,
    pub portfolio_url: Option<String>,
    pub role: UserRole,
    pub updated_at: Option<String>,
    pub user_id: String,
    pub username: String,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_number: Option<String>,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub user_id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Insert {
    /// A profile with only the required columns set.
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            avatar_url: None,
            bio: None,
            created_at: None,
            current_company: None,
            department: None,
            email: email.into(),
            enrollment_number: None,
            full_name: full_name.into(),
            graduation_year: None,
            headline: None,
            id: None,
            linkedin_url: None,
            location: None,
            phone: None,
            points: None,
            portfolio_url: None,
            role,
            updated_at: None,
            user_id: user_id.into(),
            username: username.into(),
            verified: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub avatar_url: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub bio: Option<Option<String>>,
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
    pub current_company: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub department: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub enrollment_number: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub graduation_year: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub headline: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub linkedin_url: Option<Option<String>>,
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
    pub phone: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub points: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub portfolio_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub updated_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub verified: Option<Option<bool>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_insert_carries_only_required_columns() {
        let insert = Insert::new("u-1", "priya", "Priya Sharma", "priya@example.edu", UserRole::Alumni);
        let json = serde_json::to_value(&insert).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "priya@example.edu",
                "full_name": "Priya Sharma",
                "role": "alumni",
                "user_id": "u-1",
                "username": "priya"
            })
        );
    }

    #[test]
    fn row_serializes_every_column() {
        let mut row = serde_json::Map::new();
        for column in COLUMNS {
            row.insert(column.to_string(), serde_json::Value::Null);
        }
        row.insert("email".into(), "p@example.edu".into());
        row.insert("full_name".into(), "Priya Sharma".into());
        row.insert("id".into(), "p-1".into());
        row.insert("role".into(), "student".into());
        row.insert("user_id".into(), "u-1".into());
        row.insert("username".into(), "priya".into());

        let parsed: Row = serde_json::from_value(serde_json::Value::Object(row)).unwrap();
        let back = serde_json::to_value(&parsed).unwrap();
        let mut keys: Vec<&str> = back.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, COLUMNS);
    }
}
