//! Logtint - styled rendering of captured process output
//!
//! Browser UIs that display task or workflow logs cannot interpret raw
//! terminal control codes. Logtint scans captured output for SGR ("Select
//! Graphic Rendition") escape sequences, tracks the style they select, and
//! emits either styled text tokens or an equivalent HTML fragment.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`ansi`] - Escape sequence scanning and tokenization
//! - [`style`] - SGR parameter interpretation and style state
//! - [`palette`] - Fixed color-index to class-label tables
//! - [`render`] - HTML serialization of token sequences
//!
//! ### Supporting Modules
//!
//! - [`models`] - Data structures ([`Token`])
//! - [`config`] - Configuration loading for the CLI and page rendering
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```
//! use logtint::{to_html, tokenize};
//!
//! let tokens = tokenize("\x1b[31mfailed\x1b[0m to pull image");
//! assert_eq!(tokens[0].classes, vec!["text-red-400"]);
//!
//! let html = to_html("\x1b[31mfailed\x1b[0m to pull image");
//! assert_eq!(html, "<span class=\"text-red-400\">failed</span> to pull image");
//! ```
//!
//! ## Guarantees
//!
//! - **Total:** every input string converts; malformed escape-like text
//!   passes through as plain text and unknown SGR codes are ignored
//! - **Lossless:** concatenating the tokens' text reproduces the input with
//!   every matched escape sequence removed
//! - **Stateless:** each conversion call is independent, so concurrent
//!   callers share nothing and need no locking

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod error;
pub mod models;
pub mod palette;
pub mod render;
pub mod style;

// Re-exports for core functionality
pub use ansi::{strip_sgr, to_html, tokenize};
pub use error::{Error, Result};
pub use models::Token;
pub use render::{escape_html, render_document, render_fragment};
pub use style::StyleState;

// Convenience re-exports for common types
pub use config::{Config, ConfigLoader, OutputFormat, PageConfig};

/// The current version of logtint from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The crate description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
