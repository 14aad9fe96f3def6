//! Speak command — annotate text and wrap the result in `<speak>` tags.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use langwrap_core::{Annotator, Config};

use super::{VoiceArgs, read_input};

/// Arguments for the `speak` subcommand.
#[derive(Args, Debug)]
pub struct SpeakArgs {
    /// File to annotate (reads stdin when omitted).
    pub file: Option<Utf8PathBuf>,

    /// Voice options overriding config-file defaults.
    #[command(flatten)]
    pub voice: VoiceArgs,
}

/// JSON payload for `--json` output.
#[derive(Serialize)]
struct SpeakReport<'a> {
    ssml: &'a str,
}

/// Annotate a file (or stdin) and emit a complete `<speak>` document.
#[instrument(name = "cmd_speak", skip_all, fields(file = ?args.file))]
pub fn cmd_speak(
    args: SpeakArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.voice.resolve(config);
    debug!(?options, "executing speak command");

    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let output = Annotator::with_options(options).speak(&content, None);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&SpeakReport { ssml: &output })?);
    } else {
        println!("{output}");
    }

    Ok(())
}
