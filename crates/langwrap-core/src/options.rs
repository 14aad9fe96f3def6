//! Annotation options: country, rate, and volume enumerations.
//!
//! Typed [`Options`] values are valid by construction. The dynamic checks the
//! reference implementation performed on plain objects live at the untyped
//! boundary, [`Options::from_value`], which is what [`configure_value`]
//! and [`ssml_value`] go through.
//!
//! [`configure_value`]: crate::annotate::configure_value
//! [`ssml_value`]: crate::annotate::Annotator::ssml_value

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Country code for `<lang/>` tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Country {
    /// American English (`en-US`).
    #[default]
    Us,
    /// British English (`en-UK`).
    Uk,
}

impl Country {
    /// Comma-separated list of accepted values, for error messages.
    pub const VALID: &'static str = "us, uk";

    /// Returns the country as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Uk => "uk",
        }
    }

    /// The `xml:lang` attribute value for this country.
    pub const fn lang_tag(&self) -> &'static str {
        match self {
            Self::Us => "en-US",
            Self::Uk => "en-UK",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "us" => Some(Self::Us),
            "uk" => Some(Self::Uk),
            _ => None,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speech rate applied to Latin runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Rate {
    /// Slowest rate.
    XSlow,
    /// Slow rate.
    Slow,
    /// Default rate.
    Medium,
    /// Fast rate.
    Fast,
    /// Fastest rate.
    XFast,
}

impl Rate {
    /// Comma-separated list of accepted values, for error messages.
    pub const VALID: &'static str = "x-slow, slow, medium, fast, x-fast";

    /// Returns the rate as its SSML attribute value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::XSlow => "x-slow",
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
            Self::XFast => "x-fast",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "x-slow" => Some(Self::XSlow),
            "slow" => Some(Self::Slow),
            "medium" => Some(Self::Medium),
            "fast" => Some(Self::Fast),
            "x-fast" => Some(Self::XFast),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio volume, used both globally and for Latin runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Volume {
    /// Softest volume.
    XSoft,
    /// Soft volume.
    Soft,
    /// Default volume.
    Medium,
    /// Loud volume.
    Loud,
    /// Loudest volume.
    XLoud,
}

impl Volume {
    /// Comma-separated list of accepted values, for error messages.
    pub const VALID: &'static str = "x-soft, soft, medium, loud, x-loud";

    /// Returns the volume as its SSML attribute value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::XSoft => "x-soft",
            Self::Soft => "soft",
            Self::Medium => "medium",
            Self::Loud => "loud",
            Self::XLoud => "x-loud",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "x-soft" => Some(Self::XSoft),
            "soft" => Some(Self::Soft),
            "medium" => Some(Self::Medium),
            "loud" => Some(Self::Loud),
            "x-loud" => Some(Self::XLoud),
            _ => None,
        }
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized option keys, in the order value checks run.
const OPTION_KEYS: &[&str] = &["country", "rate", "globalVolume", "volume"];

/// Annotation options.
///
/// All fields are optional; an absent `country` resolves to [`Country::Us`]
/// at render time. Field names serialize in camelCase (`globalVolume`) for
/// compatibility with the reference implementation's option objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Country code for `<lang/>` tags. Defaults to `us` when rendering.
    pub country: Option<Country>,
    /// Speech rate for Latin runs.
    pub rate: Option<Rate>,
    /// Volume wrapping the entire output.
    pub global_volume: Option<Volume>,
    /// Volume applied within `<lang/>` tags only.
    pub volume: Option<Volume>,
}

impl Options {
    /// Validate an untyped options value and convert it.
    ///
    /// Checks, in order: the value must not be `null`, must be an object,
    /// every key must be recognized, and every value must belong to its
    /// key's enumeration. Empty-string and `null` values count as absent
    /// and are skipped rather than rejected. Unknown keys are reported
    /// before any value error, and value checks run in fixed key order
    /// (country, rate, globalVolume, volume).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first violated
    /// constraint. The input is never mutated.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = match value {
            Value::Null => return Err(ValidationError::Missing),
            Value::Object(map) => map,
            _ => return Err(ValidationError::NotAnObject),
        };

        for key in map.keys() {
            if !OPTION_KEYS.contains(&key.as_str()) {
                return Err(ValidationError::UnknownOption { key: key.clone() });
            }
        }

        Ok(Self {
            country: take_enum(map, "country", Country::parse, Country::VALID)?,
            rate: take_enum(map, "rate", Rate::parse, Rate::VALID)?,
            global_volume: take_enum(map, "globalVolume", Volume::parse, Volume::VALID)?,
            volume: take_enum(map, "volume", Volume::parse, Volume::VALID)?,
        })
    }

    /// Shallow-merge `other` into `self`: present fields in `other` win,
    /// absent fields keep their current value.
    pub fn merge(&mut self, other: &Self) {
        self.country = other.country.or(self.country);
        self.rate = other.rate.or(self.rate);
        self.global_volume = other.global_volume.or(self.global_volume);
        self.volume = other.volume.or(self.volume);
    }
}

/// Extract one enumerated option from a validated JSON object.
fn take_enum<T>(
    map: &serde_json::Map<String, Value>,
    key: &str,
    parse: fn(&str) -> Option<T>,
    valid: &'static str,
) -> Result<Option<T>, ValidationError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => {
            parse(s)
                .map(Some)
                .ok_or_else(|| ValidationError::InvalidValue {
                    key: key.to_string(),
                    value: s.clone(),
                    valid: valid.to_string(),
                })
        }
        Some(other) => Err(ValidationError::InvalidValue {
            key: key.to_string(),
            value: other.to_string(),
            valid: valid.to_string(),
        }),
    }
}
