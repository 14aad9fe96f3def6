//! Ssml command — annotate text and print the SSML body.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use langwrap_core::{Annotator, Config};

use super::{VoiceArgs, read_input};

/// Arguments for the `ssml` subcommand.
#[derive(Args, Debug)]
pub struct SsmlArgs {
    /// File to annotate (reads stdin when omitted).
    pub file: Option<Utf8PathBuf>,

    /// Voice options overriding config-file defaults.
    #[command(flatten)]
    pub voice: VoiceArgs,
}

/// JSON payload for `--json` output.
#[derive(Serialize)]
struct SsmlReport<'a> {
    ssml: &'a str,
}

/// Annotate a file (or stdin) with SSML language-switch tags.
#[instrument(name = "cmd_ssml", skip_all, fields(file = ?args.file))]
pub fn cmd_ssml(
    args: SsmlArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.voice.resolve(config);
    debug!(?options, "executing ssml command");

    let content = read_input(args.file.as_deref(), max_input_bytes)?;
    let output = Annotator::with_options(options).ssml(&content, None);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&SsmlReport { ssml: &output })?);
    } else {
        println!("{output}");
    }

    Ok(())
}
