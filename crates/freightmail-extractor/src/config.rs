//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Keyword sets used to classify the transport mode
///
/// Categories are checked in a fixed order (ocean, air, ground) and the first
/// category with any keyword present in the lower-cased text wins. Keywords
/// are plain substrings, not words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeKeywords {
    /// Ocean freight vocabulary
    #[serde(default = "default_ocean_keywords")]
    pub ocean: Vec<String>,

    /// Air freight vocabulary
    #[serde(default = "default_air_keywords")]
    pub air: Vec<String>,

    /// Road freight vocabulary
    #[serde(default = "default_ground_keywords")]
    pub ground: Vec<String>,
}

impl Default for ModeKeywords {
    fn default() -> Self {
        Self {
            ocean: default_ocean_keywords(),
            air: default_air_keywords(),
            ground: default_ground_keywords(),
        }
    }
}

impl ModeKeywords {
    /// Only the core ocean vocabulary, without container size tokens
    pub fn core() -> Self {
        Self {
            ocean: words(&["fcl", "lcl", "ocean", "sea"]),
            ..Self::default()
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Transport mode vocabulary
    #[serde(default)]
    pub mode_keywords: ModeKeywords,
}

impl Default for ExtractorConfig {
    /// Default configuration: full ocean vocabulary including container tokens
    fn default() -> Self {
        Self {
            mode_keywords: ModeKeywords::default(),
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: ocean mode only from explicit service/sea vocabulary
    pub fn strict() -> Self {
        Self {
            mode_keywords: ModeKeywords::core(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        let sets = [
            ("ocean", &self.mode_keywords.ocean),
            ("air", &self.mode_keywords.air),
            ("ground", &self.mode_keywords.ground),
        ];

        for (name, keywords) in sets {
            if keywords.is_empty() {
                return Err(ExtractorError::Config(format!(
                    "{} keyword list must not be empty",
                    name
                )));
            }
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ExtractorError::Config(format!(
                    "{} keyword list contains a blank keyword",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn default_ocean_keywords() -> Vec<String> {
    words(&["fcl", "lcl", "ocean", "sea", "container", "40hc", "20ft"])
}

fn default_air_keywords() -> Vec<String> {
    words(&["air", "flight", "airfreight"])
}

fn default_ground_keywords() -> Vec<String> {
    words(&["ftl", "ltl", "truck", "ground", "road"])
}
