use crate::cli::text_or_stdin;
use crate::error::Result;
use crate::scramble::scramble;
use tracing::debug;

/// Options for the scramble command
#[derive(Debug, Clone, Default)]
pub struct ScrambleOptions {
    /// Text to scramble; stdin when unset
    pub text: Option<String>,
    pub seed: i64,
}

pub fn run_scramble(options: &ScrambleOptions) -> Result<String> {
    let text = text_or_stdin(options.text.as_deref())?;
    debug!(seed = options.seed, bytes = text.len(), "scrambling text");
    Ok(format!("{}\n", scramble(&text, options.seed)))
}
