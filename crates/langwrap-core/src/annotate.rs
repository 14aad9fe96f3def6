//! The annotator and the process-wide default configuration.
//!
//! [`Annotator`] is an explicit, injectable instance carrying its own
//! default [`Options`]. The free functions at the bottom of this module
//! operate on one process-wide instance behind an `RwLock`, for callers
//! that want the configure-once-use-everywhere pattern.

use std::sync::{LazyLock, PoisonError, RwLock};

use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;
use crate::options::Options;
use crate::render::render;
use crate::tags::TagSet;

/// Wraps Latin runs in SSML tags, holding default options for calls that
/// do not supply their own.
///
/// # Example
///
/// ```
/// use langwrap_core::Annotator;
///
/// let annotator = Annotator::new();
/// assert_eq!(
///     annotator.ssml("текст text", None),
///     "текст <lang xml:lang=\"en-US\">text</lang>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    config: Options,
}

impl Annotator {
    /// Create an annotator with empty defaults (country resolves to `us`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an annotator with the given default options.
    pub const fn with_options(options: Options) -> Self {
        Self { config: options }
    }

    /// The annotator's current default options.
    pub const fn options(&self) -> &Options {
        &self.config
    }

    /// Wrap all Latin runs in `text` with SSML tags.
    ///
    /// When `options` is given it is used alone for this call (it replaces,
    /// not merges with, the annotator's defaults); otherwise the defaults
    /// apply. An absent `country` is filled with `us` either way. The
    /// annotator itself is never mutated.
    pub fn ssml(&self, text: &str, options: Option<&Options>) -> String {
        let resolved = options.copied().unwrap_or(self.config);
        render(text, &TagSet::build(&resolved))
    }

    /// Like [`ssml`](Self::ssml), taking untyped per-call options.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `options` fails validation.
    pub fn ssml_value(&self, text: &str, options: Option<&Value>) -> Result<String, ValidationError> {
        match options {
            Some(value) => {
                let local = Options::from_value(value)?;
                Ok(self.ssml(text, Some(&local)))
            }
            None => Ok(self.ssml(text, None)),
        }
    }

    /// Wrap [`ssml`](Self::ssml)'s result in an outer `<speak>` tag pair.
    pub fn speak(&self, text: &str, options: Option<&Options>) -> String {
        format!("<speak>{}</speak>", self.ssml(text, options))
    }

    /// Merge `options` into the annotator's defaults (present fields win).
    pub fn configure(&mut self, options: &Options) {
        self.config.merge(options);
        debug!(options = ?self.config, "annotator configured");
    }

    /// Validate untyped options, then merge them into the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] without touching the defaults when
    /// `options` fails validation.
    pub fn configure_value(&mut self, options: &Value) -> Result<(), ValidationError> {
        let validated = Options::from_value(options)?;
        self.configure(&validated);
        Ok(())
    }
}

/// The process-wide default annotator used by the free functions.
static DEFAULT: LazyLock<RwLock<Annotator>> = LazyLock::new(|| RwLock::new(Annotator::new()));

fn read_default() -> std::sync::RwLockReadGuard<'static, Annotator> {
    DEFAULT.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_default() -> std::sync::RwLockWriteGuard<'static, Annotator> {
    DEFAULT.write().unwrap_or_else(PoisonError::into_inner)
}

/// Wrap Latin runs in `text` using the process-wide default options.
pub fn ssml(text: &str) -> String {
    read_default().ssml(text, None)
}

/// Wrap Latin runs in `text` using the given options for this call only.
pub fn ssml_with(text: &str, options: &Options) -> String {
    read_default().ssml(text, Some(options))
}

/// [`ssml`] wrapped in an outer `<speak>` tag pair.
pub fn speak(text: &str) -> String {
    read_default().speak(text, None)
}

/// [`ssml_with`] wrapped in an outer `<speak>` tag pair.
pub fn speak_with(text: &str, options: &Options) -> String {
    read_default().speak(text, Some(options))
}

/// Merge `options` into the process-wide defaults.
pub fn configure(options: &Options) {
    write_default().configure(options);
}

/// Validate untyped options, then merge them into the process-wide defaults.
///
/// # Errors
///
/// Returns a [`ValidationError`] without mutating the defaults when
/// `options` fails validation.
pub fn configure_value(options: &Value) -> Result<(), ValidationError> {
    write_default().configure_value(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Country, Rate, Volume};
    use serde_json::json;

    #[test]
    fn speak_wraps_ssml_exactly() {
        let annotator = Annotator::new();
        let texts = ["рус eng", "", "123", "ENG рус eng"];
        for text in texts {
            assert_eq!(
                annotator.speak(text, None),
                format!("<speak>{}</speak>", annotator.ssml(text, None))
            );
        }
    }

    #[test]
    fn local_options_replace_defaults() {
        let mut annotator = Annotator::new();
        annotator.configure(&Options {
            global_volume: Some(Volume::Loud),
            ..Options::default()
        });

        // Local options carry no globalVolume, so no global wrap appears.
        let local = Options {
            country: Some(Country::Uk),
            ..Options::default()
        };
        assert_eq!(
            annotator.ssml("eng", Some(&local)),
            "<lang xml:lang=\"en-UK\">eng</lang>"
        );
        // Without local options the configured defaults apply.
        assert_eq!(
            annotator.ssml("eng", None),
            "<prosody volume=\"loud\"><lang xml:lang=\"en-US\">eng</lang></prosody>"
        );
    }

    #[test]
    fn configure_merges_instead_of_replacing() {
        let mut annotator = Annotator::new();
        annotator.configure(&Options {
            country: Some(Country::Uk),
            ..Options::default()
        });
        annotator.configure(&Options {
            rate: Some(Rate::Slow),
            ..Options::default()
        });
        assert_eq!(annotator.options().country, Some(Country::Uk));
        assert_eq!(annotator.options().rate, Some(Rate::Slow));
    }

    #[test]
    fn configure_value_rejects_without_mutating() {
        let mut annotator = Annotator::with_options(Options {
            country: Some(Country::Uk),
            ..Options::default()
        });
        let err = annotator.configure_value(&json!({"country": "ru"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
        assert_eq!(annotator.options().country, Some(Country::Uk));
    }

    #[test]
    fn configure_value_accepts_valid_objects() {
        let mut annotator = Annotator::new();
        annotator.configure_value(&json!({})).unwrap();
        annotator.configure_value(&json!({"volume": "loud"})).unwrap();
        annotator
            .configure_value(&json!({
                "country": "uk",
                "volume": "x-soft",
                "globalVolume": "soft",
                "rate": "slow",
            }))
            .unwrap();
        assert_eq!(annotator.options().volume, Some(Volume::XSoft));
    }

    #[test]
    fn ssml_value_validates_local_options() {
        let annotator = Annotator::new();
        let err = annotator
            .ssml_value("eng", Some(&json!({"rate": "warp"})))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));

        let ok = annotator
            .ssml_value("eng", Some(&json!({"country": "uk"})))
            .unwrap();
        assert_eq!(ok, "<lang xml:lang=\"en-UK\">eng</lang>");
    }

    #[test]
    fn all_tags_nest_in_order() {
        let annotator = Annotator::with_options(Options {
            country: Some(Country::Us),
            rate: Some(Rate::XFast),
            volume: Some(Volume::Soft),
            global_volume: Some(Volume::XLoud),
        });
        assert_eq!(
            annotator.speak("рус eng", None),
            "<speak><prosody volume=\"x-loud\">рус <lang xml:lang=\"en-US\">\
             <prosody volume=\"soft\"><prosody rate=\"x-fast\">eng\
             </prosody></prosody></lang></prosody></speak>"
        );
    }

    // The process-wide functions share one instance; keep mutation tests in
    // a single case to avoid cross-test interference.
    #[test]
    fn process_wide_defaults() {
        assert_eq!(ssml("рус"), "рус");
        assert_eq!(speak("рус"), "<speak>рус</speak>");
        assert_eq!(
            ssml_with(
                "eng",
                &Options {
                    country: Some(Country::Uk),
                    ..Options::default()
                }
            ),
            "<lang xml:lang=\"en-UK\">eng</lang>"
        );
        assert!(configure_value(&json!({"vol": "x-loud"})).is_err());
    }
}
