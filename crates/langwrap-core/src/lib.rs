//! Core library for langwrap.
//!
//! Wraps contiguous runs of ASCII Latin letters in mixed Cyrillic/Latin
//! text with SSML `<lang>` and `<prosody>` tags, so a downstream TTS engine
//! pronounces them with an English voice. Only ASCII `A`-`Z`/`a`-`z` counts
//! as Latin; there is no general script detection and no transliteration.
//!
//! # Modules
//!
//! - [`annotate`] - The annotator and process-wide defaults
//! - [`options`] - Option enumerations and untyped validation
//! - [`tags`] - SSML tag construction
//! - [`render`] - The run scanner
//! - [`config`] - Configuration file loading for the CLI
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use langwrap_core::{Annotator, Country, Options};
//!
//! let annotator = Annotator::with_options(Options {
//!     country: Some(Country::Uk),
//!     ..Options::default()
//! });
//! assert_eq!(
//!     annotator.speak("рус eng", None),
//!     "<speak>рус <lang xml:lang=\"en-UK\">eng</lang></speak>"
//! );
//! ```
#![deny(unsafe_code)]

pub mod annotate;
pub mod config;
pub mod error;
pub mod options;
pub mod render;
pub mod tags;

pub use annotate::{Annotator, configure, configure_value, speak, speak_with, ssml, ssml_with};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use options::{Country, Options, Rate, Volume};

/// Default cap on input size for the CLI (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
