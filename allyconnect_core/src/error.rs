//! Error types for the AllyConnect core.
//!
//! Every fallible operation in this crate returns one of these enums.
//! Binaries wrap them in `anyhow` at the edge.

use std::path::PathBuf;

use thiserror::Error;

/// Navigation failures raised by [`crate::paginator::Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginatorError {
    /// A paginator needs at least one item to point at.
    #[error("cannot paginate an empty item list")]
    Empty,
    /// `go_to` received an index outside `[0, len)` under the reject policy.
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange {
        /// Index requested by the caller
        index: usize,
        /// Number of items in the deck
        len: usize,
    },
}

/// Failures talking to a running [`crate::carousel::Carousel`].
#[cfg(feature = "runtime")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// The carousel task has stopped and no longer accepts commands.
    #[error("carousel task is no longer running")]
    Closed,
    /// The command reached the paginator and was rejected there.
    #[error(transparent)]
    Paginator(#[from] PaginatorError),
}

/// Failures loading a [`crate::config::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failures validating or loading [`crate::content::LandingContent`].
#[derive(Debug, Error)]
pub enum ContentError {
    /// A carousel deck has no items, so no paginator can be built for it.
    #[error("the {deck} deck has no items")]
    EmptyDeck { deck: &'static str },
    #[error("failed to parse landing content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lookups against the schema contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown table `{0}`")]
    UnknownTable(String),
    #[error("`{value}` is not a valid {enum_name} value")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = PaginatorError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 is out of range for 3 items");
    }

    #[cfg(feature = "runtime")]
    #[test]
    fn carousel_error_is_transparent_over_paginator() {
        let err: CarouselError = PaginatorError::Empty.into();
        assert_eq!(err.to_string(), PaginatorError::Empty.to_string());
    }

    #[test]
    fn empty_deck_names_the_deck() {
        let err = ContentError::EmptyDeck { deck: "hero" };
        assert_eq!(err.to_string(), "the hero deck has no items");
    }
}
