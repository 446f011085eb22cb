//! # allyconnect-core
//!
//! **Shared core of the AllyConnect alumni landing page** - the circular paginator
//! behind its carousels, the content each section renders, and typed bindings for
//! the hosted database.
//!
//! ## Features
//!
//! - **Circular Paginator** - wraparound navigation with change observers
//! - **Carousel Runtime** - Tokio task adding a cancellable auto-advance timer (feature `runtime`)
//! - **Landing Content** - slides, events, opportunities, spotlight and leaderboard records
//! - **Schema Bindings** - `Row` / `Insert` / `Update` shapes for every hosted table
//!
//! ## Quick Start
//!
//! ```rust
//! use allyconnect_core::{LandingContent, Paginator};
//!
//! let content = LandingContent::default();
//! let mut hero = Paginator::new(content.slides.len()).unwrap();
//! hero.previous();
//! assert_eq!(content.slides[hero.current()].cta, "Explore Jobs");
//! ```
//!
//! The wasm landing page depends on this crate with `default-features = false`,
//! which leaves out Tokio and the [`carousel`] module.

// ============================================================================
// Core Modules
// ============================================================================

/// Error enums for every fallible operation in the crate.
pub mod error;

/// Circular index state with observers.
///
/// See [`Paginator`](paginator::Paginator) and [`OutOfRange`](paginator::OutOfRange).
pub mod paginator;

/// Tokio actor running a paginator with an auto-advance timer.
///
/// # Key Types
///
/// - [`Carousel`](carousel::Carousel) - Handle to the running task
/// - [`CarouselSnapshot`](carousel::CarouselSnapshot) - What renderers observe
/// - [`CarouselOptions`](carousel::CarouselOptions) - Interval, autoplay, out-of-range policy
#[cfg(feature = "runtime")]
pub mod carousel;

/// Landing page content records and formatting helpers.
pub mod content;

/// `allyconnect.toml` loading and validation.
pub mod config;

/// Bindings for the hosted database schema.
pub mod schema;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::SiteConfig;
pub use content::{LandingContent, Viewer};
pub use error::{ConfigError, ContentError, PaginatorError, SchemaError};
pub use paginator::{OutOfRange, PageChange, Paginator, SubscriptionId};

#[cfg(feature = "runtime")]
pub use carousel::{AutoAdvance, Carousel, CarouselOptions, CarouselSnapshot};
#[cfg(feature = "runtime")]
pub use error::CarouselError;
