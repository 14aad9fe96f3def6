//! SSML tag construction.
//!
//! Tags are assembled once per call from resolved [`Options`], then reused
//! for every run the scanner finds.

use crate::options::Options;

/// The open/close tag strings derived from one set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    /// Opening wrap for the entire output (global volume), possibly empty.
    pub global_open: String,
    /// Closing wrap for the entire output, possibly empty.
    pub global_close: String,
    /// Opening tags for each Latin run.
    pub open: String,
    /// Closing tags for each Latin run.
    pub close: String,
}

impl TagSet {
    /// Build the tag set for the given options.
    ///
    /// Per-run nesting is `lang` outermost, then `volume`, then `rate`
    /// innermost: each optional prosody tag appends to the open string and
    /// prepends to the close string, so the last one applied wraps tightest.
    pub fn build(options: &Options) -> Self {
        let (global_open, global_close) = options.global_volume.map_or_else(
            || (String::new(), String::new()),
            |volume| {
                (
                    format!("<prosody volume=\"{volume}\">"),
                    "</prosody>".to_string(),
                )
            },
        );

        let country = options.country.unwrap_or_default();
        let mut open = format!("<lang xml:lang=\"{}\">", country.lang_tag());
        let mut close = "</lang>".to_string();

        if let Some(volume) = options.volume {
            open.push_str(&format!("<prosody volume=\"{volume}\">"));
            close.insert_str(0, "</prosody>");
        }

        if let Some(rate) = options.rate {
            open.push_str(&format!("<prosody rate=\"{rate}\">"));
            close.insert_str(0, "</prosody>");
        }

        Self {
            global_open,
            global_close,
            open,
            close,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Country, Rate, Volume};

    #[test]
    fn defaults_produce_bare_lang_tags() {
        let tags = TagSet::build(&Options::default());
        assert_eq!(tags.open, "<lang xml:lang=\"en-US\">");
        assert_eq!(tags.close, "</lang>");
        assert!(tags.global_open.is_empty());
        assert!(tags.global_close.is_empty());
    }

    #[test]
    fn uk_country_changes_lang_attribute() {
        let tags = TagSet::build(&Options {
            country: Some(Country::Uk),
            ..Options::default()
        });
        assert_eq!(tags.open, "<lang xml:lang=\"en-UK\">");
    }

    #[test]
    fn global_volume_wraps_everything() {
        let tags = TagSet::build(&Options {
            global_volume: Some(Volume::Soft),
            ..Options::default()
        });
        assert_eq!(tags.global_open, "<prosody volume=\"soft\">");
        assert_eq!(tags.global_close, "</prosody>");
    }

    #[test]
    fn rate_nests_inside_volume() {
        let tags = TagSet::build(&Options {
            volume: Some(Volume::Loud),
            rate: Some(Rate::XSlow),
            ..Options::default()
        });
        assert_eq!(
            tags.open,
            "<lang xml:lang=\"en-US\"><prosody volume=\"loud\"><prosody rate=\"x-slow\">"
        );
        assert_eq!(tags.close, "</prosody></prosody></lang>");
    }

    #[test]
    fn rate_alone_nests_inside_lang() {
        let tags = TagSet::build(&Options {
            rate: Some(Rate::Fast),
            ..Options::default()
        });
        assert_eq!(
            tags.open,
            "<lang xml:lang=\"en-US\"><prosody rate=\"fast\">"
        );
        assert_eq!(tags.close, "</prosody></lang>");
    }
}
