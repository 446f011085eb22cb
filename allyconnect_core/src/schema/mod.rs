//! Bindings for the hosted AllyConnect database (`public` schema).
//!
//! These types mirror the tables, columns and enums of the hosted store
//! name-for-name, so rows fetched from its REST endpoint deserialize directly
//! and insert/update payloads serialize to what the store expects. Nothing in
//! here talks to the network.
//!
//! Every table module exposes three shapes:
//!
//! - `Row` - a full record as returned by a select
//! - `Insert` - required columns are plain fields, columns with defaults are
//!   optional and omitted from the payload when `None`
//! - `Update` - every column optional; nullable columns are `Option<Option<T>>`
//!   so `Some(None)` clears the column with an explicit `null`
//!
//! plus `COLUMNS` and `RELATIONSHIPS` constants describing the contract.
//!
//! ```rust
//! use allyconnect_core::schema::{EventStatus, Table};
//!
//! assert_eq!(EventStatus::ALL.len(), 4);
//! assert_eq!(Table::Events.name(), "events");
//! assert!(Table::Events.columns().contains(&"max_attendees"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SchemaError;

pub mod alumni_verification;
pub mod badges;
pub mod doubts;
pub mod event_attendees;
pub mod events;
pub mod messages;
pub mod notifications;
pub mod opportunities;
pub mod otp_verification;
pub mod profiles;
pub mod student_verification;
pub mod user_badges;

/// PostgREST version the bindings were generated against.
pub const POSTGREST_VERSION: &str = "13.0.5";

/// Schema all tables live in.
pub const SCHEMA: &str = "public";

/// Free-form JSON column value (`notifications.data`).
pub type Json = serde_json::Value;

/// Reads a present key, `null` included, as `Some`. Paired with
/// `#[serde(default)]` so an absent key stays `None` on `Update` payloads.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

macro_rules! db_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $db_name:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Database name of the enum type.
            pub const DB_NAME: &'static str = $db_name;

            /// Every value, in the order the database declares them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation of the value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SchemaError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    other => Err(SchemaError::UnknownEnumValue {
                        enum_name: $db_name,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

db_enum! {
    /// Lifecycle of a student doubt (question) routed to alumni.
    DoubtStatus as "doubt_status" {
        Open => "open",
        Assigned => "assigned",
        InProgress => "in_progress",
        Resolved => "resolved",
    }
}

db_enum! {
    /// Lifecycle of a community event.
    EventStatus as "event_status" {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

db_enum! {
    /// Kind of opportunity posted by an alumnus.
    OpportunityType as "opportunity_type" {
        Internship => "internship",
        Job => "job",
        Volunteer => "volunteer",
        Project => "project",
    }
}

db_enum! {
    /// Account role stored on `profiles.role`.
    UserRole as "user_role" {
        Admin => "admin",
        Alumni => "alumni",
        Student => "student",
    }
}

impl UserRole {
    /// Alumni and admins may publish opportunities; students may not.
    pub fn can_post_opportunities(&self) -> bool {
        matches!(self, UserRole::Alumni | UserRole::Admin)
    }
}

/// A foreign key declared on a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub foreign_key_name: &'static str,
    pub columns: &'static [&'static str],
    pub is_one_to_one: bool,
    pub referenced_relation: &'static str,
    pub referenced_columns: &'static [&'static str],
}

impl Relationship {
    /// Many-to-one reference of `column` to `profiles.id`, the common case.
    pub(crate) const fn to_profiles(foreign_key_name: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            foreign_key_name,
            columns,
            is_one_to_one: false,
            referenced_relation: "profiles",
            referenced_columns: &["id"],
        }
    }
}

/// Every table in the `public` schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    AlumniVerification,
    Badges,
    Doubts,
    EventAttendees,
    Events,
    Messages,
    Notifications,
    Opportunities,
    OtpVerification,
    Profiles,
    StudentVerification,
    UserBadges,
}

impl Table {
    pub const ALL: &'static [Table] = &[
        Table::AlumniVerification,
        Table::Badges,
        Table::Doubts,
        Table::EventAttendees,
        Table::Events,
        Table::Messages,
        Table::Notifications,
        Table::Opportunities,
        Table::OtpVerification,
        Table::Profiles,
        Table::StudentVerification,
        Table::UserBadges,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::AlumniVerification => "alumni_verification",
            Table::Badges => "badges",
            Table::Doubts => "doubts",
            Table::EventAttendees => "event_attendees",
            Table::Events => "events",
            Table::Messages => "messages",
            Table::Notifications => "notifications",
            Table::Opportunities => "opportunities",
            Table::OtpVerification => "otp_verification",
            Table::Profiles => "profiles",
            Table::StudentVerification => "student_verification",
            Table::UserBadges => "user_badges",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::AlumniVerification => alumni_verification::COLUMNS,
            Table::Badges => badges::COLUMNS,
            Table::Doubts => doubts::COLUMNS,
            Table::EventAttendees => event_attendees::COLUMNS,
            Table::Events => events::COLUMNS,
            Table::Messages => messages::COLUMNS,
            Table::Notifications => notifications::COLUMNS,
            Table::Opportunities => opportunities::COLUMNS,
            Table::OtpVerification => otp_verification::COLUMNS,
            Table::Profiles => profiles::COLUMNS,
            Table::StudentVerification => student_verification::COLUMNS,
            Table::UserBadges => user_badges::COLUMNS,
        }
    }

    pub fn relationships(&self) -> &'static [Relationship] {
        match self {
            Table::AlumniVerification => alumni_verification::RELATIONSHIPS,
            Table::Badges => badges::RELATIONSHIPS,
            Table::Doubts => doubts::RELATIONSHIPS,
            Table::EventAttendees => event_attendees::RELATIONSHIPS,
            Table::Events => events::RELATIONSHIPS,
            Table::Messages => messages::RELATIONSHIPS,
            Table::Notifications => notifications::RELATIONSHIPS,
            Table::Opportunities => opportunities::RELATIONSHIPS,
            Table::OtpVerification => otp_verification::RELATIONSHIPS,
            Table::Profiles => profiles::RELATIONSHIPS,
            Table::StudentVerification => student_verification::RELATIONSHIPS,
            Table::UserBadges => user_badges::RELATIONSHIPS,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .iter()
            .copied()
            .find(|table| table.name() == value)
            .ok_or_else(|| SchemaError::UnknownTable(value.to_string()))
    }
}

/// Arguments of the `get_user_role` database function, which returns a [`UserRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserRoleArgs {
    pub user_uuid: String,
}

impl GetUserRoleArgs {
    pub const FUNCTION: &'static str = "get_user_role";
}

/// Serializable description of the whole contract, for tooling and diffing.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaContract {
    pub postgrest_version: &'static str,
    pub schema: &'static str,
    pub tables: Vec<TableContract>,
    pub enums: Vec<EnumContract>,
    pub functions: Vec<FunctionContract>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableContract {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub relationships: &'static [Relationship],
}

impl From<Table> for TableContract {
    fn from(table: Table) -> Self {
        Self {
            name: table.name(),
            columns: table.columns(),
            relationships: table.relationships(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumContract {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionContract {
    pub name: &'static str,
    pub args: Vec<(&'static str, &'static str)>,
    pub returns: &'static str,
}

impl SchemaContract {
    pub fn current() -> Self {
        fn values<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
            all.iter().map(as_str).collect()
        }

        Self {
            postgrest_version: POSTGREST_VERSION,
            schema: SCHEMA,
            tables: Table::ALL.iter().copied().map(TableContract::from).collect(),
            enums: vec![
                EnumContract {
                    name: DoubtStatus::DB_NAME,
                    values: values(DoubtStatus::ALL, DoubtStatus::as_str),
                },
                EnumContract {
                    name: EventStatus::DB_NAME,
                    values: values(EventStatus::ALL, EventStatus::as_str),
                },
                EnumContract {
                    name: OpportunityType::DB_NAME,
                    values: values(OpportunityType::ALL, OpportunityType::as_str),
                },
                EnumContract {
                    name: UserRole::DB_NAME,
                    values: values(UserRole::ALL, UserRole::as_str),
                },
            ],
            functions: vec![FunctionContract {
                name: GetUserRoleArgs::FUNCTION,
                args: vec![("user_uuid", "string")],
                returns: UserRole::DB_NAME,
            }],
        }
    }

    /// Contract of a single table, looked up by its database name.
    pub fn table(name: &str) -> Result<TableContract, SchemaError> {
        name.parse::<Table>().map(TableContract::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enum_values_match_database_order() {
        let contract = SchemaContract::current();
        let pairs: Vec<(&str, Vec<&str>)> = contract
            .enums
            .iter()
            .map(|e| (e.name, e.values.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("doubt_status", vec!["open", "assigned", "in_progress", "resolved"]),
                ("event_status", vec!["upcoming", "ongoing", "completed", "cancelled"]),
                ("opportunity_type", vec!["internship", "job", "volunteer", "project"]),
                ("user_role", vec!["admin", "alumni", "student"]),
            ]
        );
    }

    #[test]
    fn enums_use_wire_strings() {
        assert_eq!(
            serde_json::to_string(&DoubtStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: EventStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, EventStatus::Cancelled);
        assert_eq!("job".parse::<OpportunityType>().unwrap(), OpportunityType::Job);
    }

    #[test]
    fn unknown_enum_value_is_an_error() {
        let err = "moderator".parse::<UserRole>().unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownEnumValue {
                enum_name: "user_role",
                value: "moderator".into(),
            }
        );
    }

    #[test]
    fn only_alumni_and_admins_post_opportunities() {
        assert!(UserRole::Alumni.can_post_opportunities());
        assert!(UserRole::Admin.can_post_opportunities());
        assert!(!UserRole::Student.can_post_opportunities());
    }

    #[test]
    fn table_names_round_trip_through_from_str() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>().unwrap(), *table);
        }
        assert_eq!(
            "alumni".parse::<Table>().unwrap_err(),
            SchemaError::UnknownTable("alumni".into())
        );
    }

    #[test]
    fn every_relationship_points_at_a_known_table_and_column() {
        for table in Table::ALL {
            for rel in table.relationships() {
                for column in rel.columns {
                    assert!(
                        table.columns().contains(column),
                        "{}.{} missing for {}",
                        table,
                        column,
                        rel.foreign_key_name
                    );
                }
                let target: Table = rel.referenced_relation.parse().unwrap();
                for column in rel.referenced_columns {
                    assert!(target.columns().contains(column));
                }
                assert!(rel.foreign_key_name.starts_with(table.name()));
            }
        }
    }

    #[test]
    fn every_table_has_an_id_column() {
        for table in Table::ALL {
            assert!(table.columns().contains(&"id"), "{} has no id", table);
        }
    }

    #[test]
    fn contract_serializes_table_lookup() {
        let table = SchemaContract::table("user_badges").unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["name"], "user_badges");
        assert_eq!(json["relationships"][0]["referenced_relation"], "badges");
        assert_eq!(json["relationships"][1]["foreign_key_name"], "user_badges_user_id_fkey");
    }
}
