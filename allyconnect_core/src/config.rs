//! Site configuration.
//!
//! Loads an optional `allyconnect.toml`. Every section and key has a default,
//! so an empty file is a valid config.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::paginator::OutOfRange;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSiteConfig")]
pub struct SiteConfig {
    pub site: BrandConfig,
    /// Hero banner carousel
    pub hero: DeckConfig,
    /// Alumni spotlight carousel
    pub spotlight: DeckConfig,
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub brand: String,
    pub search_placeholder: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            brand: "AllyConnect".into(),
            search_placeholder: "Search alumni, events, opportunities...".into(),
        }
    }
}

/// Timing of one carousel deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Milliseconds between auto-advance steps. Must be positive.
    pub interval_ms: u64,
    /// Start advancing as soon as the deck is shown.
    pub autoplay: bool,
}

impl DeckConfig {
    pub const HERO: Self = Self {
        interval_ms: 5000,
        autoplay: true,
    };
    pub const SPOTLIGHT: Self = Self {
        interval_ms: 7000,
        autoplay: false,
    };

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Options for a Tokio carousel running this deck.
    #[cfg(feature = "runtime")]
    pub fn carousel_options(&self, out_of_range: OutOfRange) -> crate::carousel::CarouselOptions {
        crate::carousel::CarouselOptions {
            interval: self.interval(),
            autoplay: self.autoplay,
            out_of_range,
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::HERO
    }
}

/// On-disk shape. Deck keys left out fall back to that deck's own defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSiteConfig {
    site: BrandConfig,
    hero: PartialDeck,
    spotlight: PartialDeck,
    navigation: NavigationConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialDeck {
    interval_ms: Option<u64>,
    autoplay: Option<bool>,
}

impl PartialDeck {
    fn over(self, base: DeckConfig) -> DeckConfig {
        DeckConfig {
            interval_ms: self.interval_ms.unwrap_or(base.interval_ms),
            autoplay: self.autoplay.unwrap_or(base.autoplay),
        }
    }
}

impl From<RawSiteConfig> for SiteConfig {
    fn from(raw: RawSiteConfig) -> Self {
        Self {
            site: raw.site,
            hero: raw.hero.over(DeckConfig::HERO),
            spotlight: raw.spotlight.over(DeckConfig::SPOTLIGHT),
            navigation: raw.navigation,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// What a jump to a nonexistent slide does: `reject` or `wrap`.
    pub out_of_range: OutOfRange,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file, failing on any error.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "falling back to default config: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, deck) in [("hero", &self.hero), ("spotlight", &self.spotlight)] {
            if deck.interval_ms == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name}.interval_ms must be greater than zero"
                )));
            }
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: BrandConfig::default(),
            hero: DeckConfig::HERO,
            spotlight: DeckConfig::SPOTLIGHT,
            navigation: NavigationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site.brand, "AllyConnect");
        assert_eq!(config.hero.interval(), Duration::from_secs(5));
        assert!(config.hero.autoplay);
        assert_eq!(config.spotlight.interval_ms, 7000);
        assert!(!config.spotlight.autoplay);
        assert_eq!(config.navigation.out_of_range, OutOfRange::Reject);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("allyconnect.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("allyconnect.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[site]
brand = "Ally"

[spotlight]
interval_ms = 3000
autoplay = true

[navigation]
out_of_range = "wrap"
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config.site.brand, "Ally");
        assert_eq!(
            config.site.search_placeholder,
            "Search alumni, events, opportunities..."
        );
        assert_eq!(config.hero, DeckConfig::HERO);
        assert_eq!(config.spotlight.interval_ms, 3000);
        assert!(config.spotlight.autoplay);
        assert_eq!(config.navigation.out_of_range, OutOfRange::Wrap);
    }

    #[test]
    fn test_partial_deck_keeps_its_own_defaults() {
        let config = SiteConfig::from_toml_str("[spotlight]\ninterval_ms = 9000\n").expect("parse");
        assert_eq!(config.spotlight.interval_ms, 9000);
        assert!(!config.spotlight.autoplay);
        assert_eq!(config.hero, DeckConfig::HERO);
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("allyconnect.toml");
        std::fs::File::create(&config_path).expect("create empty config");

        assert_eq!(SiteConfig::load_from_path(&config_path), SiteConfig::default());
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("allyconnect.toml");
        std::fs::write(&config_path, "[hero]\ninterval_ms = 0\n").expect("write config");

        assert_eq!(SiteConfig::load_from_path(&config_path), SiteConfig::default());
        assert!(matches!(
            SiteConfig::read(&config_path),
            Err(ConfigError::Invalid(msg)) if msg.contains("hero.interval_ms")
        ));
    }

    #[test]
    fn test_strict_parse_errors() {
        assert!(matches!(
            SiteConfig::from_toml_str("[navigation]\nout_of_range = \"clamp\"\n"),
            Err(ConfigError::Parse(_))
        ));
        let temp = TempDir::new().expect("temp dir");
        assert!(matches!(
            SiteConfig::read(&temp.path().join("missing.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_toml_output_reloads() {
        let config = SiteConfig::default();
        let text = config.to_toml_string().expect("serialize");
        assert!(text.contains("out_of_range = \"reject\""));
        assert_eq!(SiteConfig::from_toml_str(&text).expect("reparse"), config);
    }
}
