use crate::cli::text_or_stdin;
use crate::error::Result;
use crate::hex::{decode, encode, string_from_hex};
use std::path::PathBuf;
use tracing::debug;

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Hex input; stdin when unset
    pub hex: Option<String>,
    /// Write decoded bytes to this file instead of printing text
    pub output: Option<PathBuf>,
    /// Print the decoded bytes as normalized hex
    pub raw: bool,
}

/// Decode hex input
///
/// Prints UTF-8 text by default. With `output` set, the raw bytes go to the
/// file and a short summary is returned instead.
pub fn run_decode(options: &DecodeOptions) -> Result<String> {
    let input = text_or_stdin(options.hex.as_deref())?;

    if options.output.is_none() && !options.raw {
        let text = string_from_hex(&input)?;
        debug!(input_len = input.len(), bytes = text.len(), "decoded hex text");
        return Ok(format!("{}\n", text));
    }

    let bytes = decode(&input)?;
    debug!(input_len = input.len(), bytes = bytes.len(), "decoded hex");
    if let Some(path) = &options.output {
        std::fs::write(path, &bytes)?;
        return Ok(format!("Wrote {} bytes to {}\n", bytes.len(), path.display()));
    }
    Ok(format!("{}\n", encode(&bytes)))
}
