//! Landing page content: the immutable records each section renders.
//!
//! [`LandingContent::default`] is the built-in sample page. A deployment can
//! replace any part of it with JSON; missing sections keep their defaults.

mod sample;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ContentError;
use crate::schema::{EventStatus, OpportunityType, UserRole, events};

/// Icon names used by stats and social links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Users,
    Calendar,
    Briefcase,
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub cta: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub glyph: Glyph,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub attendees: u32,
    pub max_attendees: u32,
    pub image: String,
    pub status: EventStatus,
    pub featured: bool,
}

impl EventCard {
    /// Registered share of capacity, rounded half up. A zero-capacity event reports 0.
    pub fn attendance_percentage(&self) -> u32 {
        if self.max_attendees == 0 {
            return 0;
        }
        let attendees = u64::from(self.attendees) * 100;
        let max = u64::from(self.max_attendees);
        u32::try_from((attendees + max / 2) / max).unwrap_or(u32::MAX)
    }

    pub fn is_full(&self) -> bool {
        self.attendees >= self.max_attendees
    }

    pub fn register_label(&self) -> &'static str {
        if self.is_full() {
            "Event Full"
        } else {
            "Register Now"
        }
    }

    pub fn status_label(&self) -> String {
        capitalize(self.status.as_str())
    }

    /// Render a stored `events` row as a card.
    ///
    /// `event_date` is RFC 3339. If it does not parse, the raw value is shown
    /// as the date and the time is left blank.
    pub fn from_row(row: &events::Row) -> Self {
        let (date, time) = match DateTime::parse_from_rfc3339(&row.event_date) {
            Ok(at) => (
                at.format("%b %-d, %Y").to_string(),
                at.format("%-I:%M %p").to_string(),
            ),
            Err(err) => {
                warn!(event = %row.id, value = %row.event_date, "unparseable event_date: {err}");
                (row.event_date.clone(), String::new())
            }
        };
        let capacity = |value: Option<i32>| value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0);

        Self {
            id: row.id.clone(),
            title: row.title.clone(),
            description: row.description.clone(),
            date,
            time,
            location: row.location.clone().unwrap_or_default(),
            attendees: capacity(row.current_attendees),
            max_attendees: capacity(row.max_attendees),
            image: row.image_url.clone().unwrap_or_default(),
            status: row.status.unwrap_or(EventStatus::Upcoming),
            featured: row.is_featured.unwrap_or(false),
        }
    }
}

/// Alumnus who posted an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    pub name: String,
    pub avatar: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCard {
    pub id: String,
    pub title: String,
    pub company: String,
    pub kind: OpportunityType,
    pub location: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_by: Poster,
    pub posted_date: String,
    pub deadline: String,
    pub applicants: u32,
    pub featured: bool,
}

impl OpportunityCard {
    const VISIBLE_REQUIREMENTS: usize = 3;

    pub fn visible_requirements(&self) -> &[String] {
        let shown = self.requirements.len().min(Self::VISIBLE_REQUIREMENTS);
        &self.requirements[..shown]
    }

    /// Requirements collapsed into the "+N more" chip.
    pub fn hidden_requirement_count(&self) -> usize {
        self.requirements.len().saturating_sub(Self::VISIBLE_REQUIREMENTS)
    }

    pub fn kind_label(&self) -> String {
        capitalize(self.kind.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniProfile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub graduation_year: i32,
    pub department: String,
    pub achievements: Vec<String>,
    pub bio: String,
    pub points: u32,
    pub verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    pub doubts_resolved: u32,
    pub events_hosted: u32,
    pub opportunities_posted: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub rank: u32,
    pub previous_rank: u32,
    pub name: String,
    pub avatar: String,
    pub points: u32,
    pub department: String,
    pub graduation_year: i32,
    pub badges: u32,
    pub contributions: Contributions,
}

/// Movement since the previous ranking. A smaller rank number is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankChange {
    Up(u32),
    Down(u32),
    Same,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Ranked(u32),
}

impl LeaderboardEntry {
    pub fn rank_change(&self) -> RankChange {
        use std::cmp::Ordering;

        match self.rank.cmp(&self.previous_rank) {
            Ordering::Less => RankChange::Up(self.previous_rank - self.rank),
            Ordering::Greater => RankChange::Down(self.rank - self.previous_rank),
            Ordering::Equal => RankChange::Same,
        }
    }

    pub fn medal(&self) -> Medal {
        match self.rank {
            1 => Medal::Gold,
            2 => Medal::Silver,
            3 => Medal::Bronze,
            other => Medal::Ranked(other),
        }
    }
}

/// Community totals shown beside the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    pub total_points: u32,
    pub active_contributors: u32,
    pub doubts_resolved: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub glyph: Glyph,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Counters on the header's bell and chat buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCounts {
    pub notifications: u32,
    pub messages: u32,
}

/// Signed-in user shown in the header. The landing page never authenticates;
/// whoever mounts it decides who this is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewer {
    pub name: String,
    pub avatar: String,
    pub role: UserRole,
}

impl Viewer {
    /// Avatar fallback letter, `U` when the name is blank.
    pub fn avatar_fallback(&self) -> char {
        self.name.chars().next().unwrap_or('U')
    }
}

/// Everything the landing page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub slides: Vec<Slide>,
    pub stats: Vec<HeroStat>,
    pub events: Vec<EventCard>,
    pub opportunities: Vec<OpportunityCard>,
    pub spotlight: Vec<AlumniProfile>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub monthly: MonthlyTotals,
    pub nav_links: Vec<NavLink>,
    pub unread: UnreadCounts,
    /// Who the header greets; `None` renders the guest actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<Viewer>,
    pub about: String,
    pub footer_sections: Vec<FooterSection>,
    pub social_links: Vec<SocialLink>,
    pub legal_links: Vec<NavLink>,
    pub contact: ContactInfo,
}

impl Default for LandingContent {
    fn default() -> Self {
        sample::landing()
    }
}

impl LandingContent {
    const PODIUM: usize = 3;
    const BOARD: usize = 5;

    /// Parse JSON content and check that both carousel decks can be paginated.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::EmptyDeck { deck: "hero" });
        }
        if self.spotlight.is_empty() {
            return Err(ContentError::EmptyDeck { deck: "spotlight" });
        }
        Ok(())
    }

    /// Top three entries.
    pub fn podium(&self) -> &[LeaderboardEntry] {
        let end = self.leaderboard.len().min(Self::PODIUM);
        &self.leaderboard[..end]
    }

    /// Entries four and five, shown in the side list.
    pub fn runners_up(&self) -> &[LeaderboardEntry] {
        let len = self.leaderboard.len();
        &self.leaderboard[len.min(Self::PODIUM)..len.min(Self::BOARD)]
    }
}

/// First letter of each whitespace-separated word: `"Sarah Chen"` becomes `"SC"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Group digits in threes: `3200` becomes `"3,200"`.
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!(
        "© {year} {brand}. All rights reserved. Built with passion for our alumni community."
    )
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(attendees: u32, max_attendees: u32) -> EventCard {
        EventCard {
            attendees,
            max_attendees,
            ..LandingContent::default().events[0].clone()
        }
    }

    #[test]
    fn attendance_rounds_half_up() {
        assert_eq!(event(85, 150).attendance_percentage(), 57);
        assert_eq!(event(42, 80).attendance_percentage(), 53);
        assert_eq!(event(120, 200).attendance_percentage(), 60);
        assert_eq!(event(3, 0).attendance_percentage(), 0);
    }

    #[test]
    fn full_event_disables_registration() {
        assert_eq!(event(150, 150).register_label(), "Event Full");
        assert!(event(151, 150).is_full());
        assert_eq!(event(149, 150).register_label(), "Register Now");
        assert_eq!(event(0, 1).status_label(), "Upcoming");
    }

    #[test]
    fn requirements_collapse_after_three() {
        let content = LandingContent::default();
        let card = &content.opportunities[0];
        assert_eq!(card.visible_requirements(), &card.requirements[..3]);
        assert_eq!(card.hidden_requirement_count(), 1);
        assert_eq!(card.kind_label(), "Internship");

        let short = OpportunityCard {
            requirements: vec!["Rust".into()],
            ..card.clone()
        };
        assert_eq!(short.visible_requirements().len(), 1);
        assert_eq!(short.hidden_requirement_count(), 0);
    }

    #[test]
    fn rank_movement_and_medals() {
        let content = LandingContent::default();
        let changes: Vec<RankChange> = content.leaderboard.iter().map(LeaderboardEntry::rank_change).collect();
        assert_eq!(
            changes,
            vec![
                RankChange::Up(1),
                RankChange::Down(1),
                RankChange::Up(1),
                RankChange::Down(1),
                RankChange::Same,
            ]
        );
        let medals: Vec<Medal> = content.leaderboard.iter().map(LeaderboardEntry::medal).collect();
        assert_eq!(
            medals,
            vec![Medal::Gold, Medal::Silver, Medal::Bronze, Medal::Ranked(4), Medal::Ranked(5)]
        );
    }

    #[test]
    fn leaderboard_splits_into_podium_and_runners_up() {
        let content = LandingContent::default();
        let podium: Vec<&str> = content.podium().iter().map(|e| e.name.as_str()).collect();
        let rest: Vec<&str> = content.runners_up().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(podium, vec!["Arjun Patel", "Priya Sharma", "Rohan Kumar"]);
        assert_eq!(rest, vec!["Neha Singh", "Vikram Gupta"]);

        let short = LandingContent {
            leaderboard: content.leaderboard[..2].to_vec(),
            ..content.clone()
        };
        assert_eq!(short.podium().len(), 2);
        assert!(short.runners_up().is_empty());
    }

    #[test]
    fn helpers_format_like_the_page() {
        assert_eq!(initials("Dr. Emily Watson"), "DEW");
        assert_eq!(initials("  Priya   Sharma "), "PS");
        assert_eq!(format_points(3200), "3,200");
        assert_eq!(format_points(15420), "15,420");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1_234_567), "1,234,567");
        assert_eq!(format_points(0), "0");
        assert!(copyright_line(2024, "AllyConnect").starts_with("© 2024 AllyConnect."));
    }

    #[test]
    fn default_content_is_the_sample_page() {
        let content = LandingContent::default();
        assert_eq!(content.slides.len(), 3);
        assert_eq!(content.stats.len(), 3);
        assert_eq!(content.events.len(), 3);
        assert_eq!(content.opportunities.len(), 3);
        assert_eq!(content.spotlight.len(), 3);
        assert_eq!(content.leaderboard.len(), 5);
        assert_eq!(content.nav_links.len(), 4);
        assert_eq!(content.footer_sections.len(), 3);
        assert_eq!(content.social_links.len(), 4);
        assert_eq!(content.legal_links.len(), 5);
        assert_eq!(content.monthly.total_points, 15_420);
        assert!(content.validate().is_ok());
    }

    #[test]
    fn empty_decks_are_rejected() {
        let no_slides = LandingContent {
            slides: Vec::new(),
            ..LandingContent::default()
        };
        assert!(matches!(
            no_slides.validate(),
            Err(ContentError::EmptyDeck { deck: "hero" })
        ));

        let err = LandingContent::from_json(r#"{ "spotlight": [] }"#).unwrap_err();
        assert!(matches!(err, ContentError::EmptyDeck { deck: "spotlight" }));
    }

    #[test]
    fn partial_json_keeps_default_sections() {
        let content = LandingContent::from_json(
            r#"{ "monthly": { "total_points": 1, "active_contributors": 2, "doubts_resolved": 3 } }"#,
        )
        .unwrap();
        assert_eq!(content.monthly.active_contributors, 2);
        assert_eq!(content.slides, LandingContent::default().slides);
        assert!(matches!(
            LandingContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn card_from_event_row() {
        let row = events::Row {
            created_at: None,
            current_attendees: Some(85),
            description: "Panel".into(),
            event_date: "2024-11-15T18:00:00+00:00".into(),
            id: "e-1".into(),
            image_url: None,
            is_featured: Some(true),
            location: Some("Main Auditorium".into()),
            max_attendees: None,
            organizer_id: "p-1".into(),
            status: Some(EventStatus::Ongoing),
            title: "Tech Career Panel Discussion".into(),
            updated_at: None,
        };
        let card = EventCard::from_row(&row);
        assert_eq!(card.date, "Nov 15, 2024");
        assert_eq!(card.time, "6:00 PM");
        assert_eq!(card.attendees, 85);
        assert_eq!(card.max_attendees, 0);
        assert!(card.featured);
        assert_eq!(card.status_label(), "Ongoing");

        let bad = events::Row {
            event_date: "next tuesday".into(),
            status: None,
            ..row
        };
        let card = EventCard::from_row(&bad);
        assert_eq!(card.date, "next tuesday");
        assert_eq!(card.time, "");
        assert_eq!(card.status, EventStatus::Upcoming);
    }

    #[test]
    fn viewer_fallback_letter() {
        let viewer = Viewer {
            name: String::new(),
            avatar: String::new(),
            role: UserRole::Student,
        };
        assert_eq!(viewer.avatar_fallback(), 'U');
    }
}
