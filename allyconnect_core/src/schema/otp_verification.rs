//! `otp_verification` - one-time codes sent during phone verification.

use serde::{Deserialize, Serialize};

use super::Relationship;

pub const COLUMNS: &[&str] = &["created_at", "expires_at", "id", "otp_code", "phone", "used"];

pub const RELATIONSHIPS: &[Relationship] = &[];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub created_at: Option<String>,
    pub expires_at: String,
    pub id: String,
    pub otp_code: String,
    pub phone: String,
    pub used: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub expires_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub otp_code: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub created_at: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::double_option"
    )]
    pub used: Option<Option<bool>>,
}
