//! Configuration management for logtint
//!
//! Covers what the CLI and the page renderer can vary: the output form and
//! the shell of the standalone HTML page. The color palette itself is fixed
//! (see [`crate::palette`]) and deliberately not configurable.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use loader::ConfigLoader;

/// Main configuration structure for logtint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration
    pub output: OutputConfig,

    /// Standalone page configuration
    pub page: PageConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output form written by the CLI
    pub format: OutputFormat,
}

/// The form the converted output takes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment for direct container assignment
    #[default]
    Html,
    /// Complete standalone HTML page
    Page,
    /// Token records as JSON
    Tokens,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "html" | "fragment" => Ok(OutputFormat::Html),
            "page" | "document" => Ok(OutputFormat::Page),
            "tokens" | "json" => Ok(OutputFormat::Tokens),
            _ => Err(Error::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Standalone HTML page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title
    pub title: String,

    /// Font family for the log block
    pub font_family: String,

    /// Font size in points
    pub font_size: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Task log".to_string(),
            font_family: "JetBrains Mono".to_string(),
            font_size: 12,
        }
    }
}
