//! # allyconnect
//!
//! Terminal companion for the AllyConnect landing page. Runs the same carousel
//! the page runs, prints the content each section renders, and dumps the
//! hosted-schema contract.
//!
//! ## Usage
//!
//! ```bash
//! # Watch the hero banner advance three times
//! allyconnect preview --ticks 3
//!
//! # Spotlight deck, one step every 200ms
//! allyconnect preview --deck spotlight --interval-ms 200
//!
//! # Leaderboard as JSON
//! allyconnect content --section leaderboard --json
//!
//! # One table of the schema contract
//! allyconnect schema --table profiles
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use allyconnect_core::content::{
    LeaderboardEntry, Medal, OpportunityCard, RankChange, format_points,
};
use allyconnect_core::schema::SchemaContract;
use allyconnect_core::{Carousel, CarouselSnapshot, LandingContent, SiteConfig};

const DEFAULT_CONFIG: &str = "allyconnect.toml";

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "allyconnect")]
#[command(about = "Preview the AllyConnect landing carousels, content and schema")]
#[command(version)]
struct Args {
    /// Site config (default: ./allyconnect.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Landing content JSON (default: built-in sample content)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a carousel with auto-advance and print each slide it lands on
    Preview {
        #[arg(long, value_enum, default_value_t = Deck::Hero)]
        deck: Deck,
        /// Number of auto-advance steps to wait for
        #[arg(long, default_value_t = 3)]
        ticks: usize,
        /// Override the deck's configured interval
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
    },
    /// Print landing content
    Content {
        /// Only this section
        #[arg(long, value_enum)]
        section: Option<Section>,
        /// Emit JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Print the hosted-schema contract as JSON
    Schema {
        /// Only this table
        #[arg(long)]
        table: Option<String>,
    },
    /// Print the resolved site config as TOML
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Deck {
    Hero,
    Spotlight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Section {
    Hero,
    Stats,
    Events,
    Opportunities,
    Spotlight,
    Leaderboard,
    Footer,
}

// ============================================================================
// Loading
// ============================================================================

/// An explicit `--config` must load cleanly; the implicit one falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::read(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SiteConfig::load_from_path(Path::new(DEFAULT_CONFIG))),
    }
}

fn load_content(path: Option<&Path>) -> Result<LandingContent> {
    let Some(path) = path else {
        return Ok(LandingContent::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading content {}", path.display()))?;
    LandingContent::from_json(&json).with_context(|| format!("loading content {}", path.display()))
}

// ============================================================================
// Commands
// ============================================================================

async fn preview(
    config: &SiteConfig,
    content: &LandingContent,
    deck: Deck,
    ticks: usize,
    interval_ms: Option<u64>,
) -> Result<()> {
    let (deck_config, labels) = match deck {
        Deck::Hero => (
            config.hero,
            content
                .slides
                .iter()
                .map(|slide| format!("{} -> {}", slide.title, slide.cta))
                .collect::<Vec<_>>(),
        ),
        Deck::Spotlight => (
            config.spotlight,
            content
                .spotlight
                .iter()
                .map(|alumni| format!("{}, {} at {}", alumni.name, alumni.title, alumni.company))
                .collect(),
        ),
    };

    let mut options = deck_config.carousel_options(config.navigation.out_of_range);
    options.autoplay = true;
    if let Some(ms) = interval_ms {
        options.interval = Duration::from_millis(ms);
    }
    debug!(?deck, ?options, "starting preview");

    let carousel = Carousel::spawn(labels.len(), options)?;
    let mut updates = carousel.subscribe();
    let first = carousel.snapshot();
    print_slide(&labels, &first);

    // A one-item deck wraps onto itself, so the snapshot never changes.
    if first.item_count == 1 {
        info!(ticks, "single-item deck, nothing to advance");
        carousel.shutdown().await;
        return Ok(());
    }

    for _ in 0..ticks {
        if updates.changed().await.is_err() {
            bail!("carousel stopped before {ticks} steps");
        }
        let snapshot = *updates.borrow_and_update();
        print_slide(&labels, &snapshot);
    }

    carousel.shutdown().await;
    info!(ticks, "preview finished");
    Ok(())
}

fn print_slide(labels: &[String], snapshot: &CarouselSnapshot) {
    println!(
        "[{}/{}] {}",
        snapshot.index + 1,
        snapshot.item_count,
        labels[snapshot.index]
    );
}

fn print_content(content: &LandingContent, section: Option<Section>, json: bool) -> Result<()> {
    if json {
        let value = match section {
            None => serde_json::to_value(content)?,
            Some(Section::Hero) => serde_json::to_value(&content.slides)?,
            Some(Section::Stats) => serde_json::to_value(&content.stats)?,
            Some(Section::Events) => serde_json::to_value(&content.events)?,
            Some(Section::Opportunities) => serde_json::to_value(&content.opportunities)?,
            Some(Section::Spotlight) => serde_json::to_value(&content.spotlight)?,
            Some(Section::Leaderboard) => serde_json::to_value(&content.leaderboard)?,
            Some(Section::Footer) => serde_json::json!({
                "about": content.about,
                "sections": content.footer_sections,
                "social_links": content.social_links,
                "legal_links": content.legal_links,
                "contact": content.contact,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let sections = match section {
        Some(section) => vec![section],
        None => Section::value_variants().to_vec(),
    };
    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_section(content, section);
    }
    Ok(())
}

fn print_section(content: &LandingContent, section: Section) {
    match section {
        Section::Hero => {
            println!("Hero");
            for slide in &content.slides {
                println!("  {} [{} -> {}]", slide.title, slide.cta, slide.cta_link);
            }
        }
        Section::Stats => {
            println!("Stats");
            for stat in &content.stats {
                println!("  {:<18} {}", stat.label, stat.value);
            }
        }
        Section::Events => {
            println!("Upcoming Events");
            for event in &content.events {
                println!(
                    "  {} - {} {} @ {} ({}/{} registered, {}%) {}",
                    event.title,
                    event.date,
                    event.time,
                    event.location,
                    event.attendees,
                    event.max_attendees,
                    event.attendance_percentage(),
                    event.register_label(),
                );
            }
        }
        Section::Opportunities => {
            println!("Latest Opportunities");
            for opportunity in &content.opportunities {
                println!("  {}", opportunity_line(opportunity));
            }
        }
        Section::Spotlight => {
            println!("Alumni Spotlight");
            for alumni in &content.spotlight {
                println!(
                    "  {} - {} at {}, {} '{:02} ({} pts)",
                    alumni.name,
                    alumni.title,
                    alumni.company,
                    alumni.department,
                    alumni.graduation_year % 100,
                    format_points(alumni.points),
                );
            }
        }
        Section::Leaderboard => {
            println!("Top Contributors");
            for entry in content.podium().iter().chain(content.runners_up()) {
                println!("  {}", leaderboard_line(entry));
            }
            let monthly = content.monthly;
            println!(
                "  This month: {} points, {} contributors, {} doubts resolved",
                format_points(monthly.total_points),
                monthly.active_contributors,
                monthly.doubts_resolved
            );
        }
        Section::Footer => {
            println!("Footer");
            for footer in &content.footer_sections {
                let links: Vec<&str> = footer.links.iter().map(|l| l.label.as_str()).collect();
                println!("  {}: {}", footer.title, links.join(", "));
            }
            println!("  Contact: {} | {}", content.contact.email, content.contact.phone);
        }
    }
}

fn opportunity_line(opportunity: &OpportunityCard) -> String {
    let mut chips = opportunity.visible_requirements().join(", ");
    let hidden = opportunity.hidden_requirement_count();
    if hidden > 0 {
        chips.push_str(&format!(" +{hidden} more"));
    }
    format!(
        "{} at {} [{}] - {} ({} applicants) needs {}",
        opportunity.title,
        opportunity.company,
        opportunity.kind_label(),
        opportunity.location,
        opportunity.applicants,
        chips
    )
}

fn leaderboard_line(entry: &LeaderboardEntry) -> String {
    let medal = match entry.medal() {
        Medal::Gold => "gold".to_string(),
        Medal::Silver => "silver".to_string(),
        Medal::Bronze => "bronze".to_string(),
        Medal::Ranked(rank) => format!("#{rank}"),
    };
    let movement = match entry.rank_change() {
        RankChange::Up(by) => format!("up {by}"),
        RankChange::Down(by) => format!("down {by}"),
        RankChange::Same => "steady".to_string(),
    };
    format!(
        "{:<7} {:<14} {:>6} pts  {}",
        medal,
        entry.name,
        format_points(entry.points),
        movement
    )
}

fn print_schema(table: Option<&str>) -> Result<()> {
    let json = match table {
        Some(name) => serde_json::to_string_pretty(&SchemaContract::table(name)?)?,
        None => serde_json::to_string_pretty(&SchemaContract::current())?,
    };
    println!("{json}");
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

async fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = load_config(args.config.as_deref())?;
    let content = load_content(args.content.as_deref())?;

    match args.command {
        Command::Preview {
            deck,
            ticks,
            interval_ms,
        } => preview(&config, &content, deck, ticks, interval_ms).await,
        Command::Content { section, json } => print_content(&content, section, json),
        Command::Schema { table } => print_schema(table.as_deref()),
        Command::Config => {
            print!("{}", config.to_toml_string().context("serializing config")?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[allyconnect] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
