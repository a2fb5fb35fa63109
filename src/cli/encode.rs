use crate::cli::text_or_stdin;
use crate::error::Result;
use crate::hex::{encode, hex_from_string};
use std::path::PathBuf;
use tracing::debug;

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Text to encode as UTF-8; stdin when neither this nor `file` is set
    pub text: Option<String>,
    /// Encode the raw bytes of this file instead
    pub file: Option<PathBuf>,
}

/// Hex-encode text or file contents, newline-terminated
pub fn run_encode(options: &EncodeOptions) -> Result<String> {
    let hex = match &options.file {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            debug!(path = %path.display(), bytes = bytes.len(), "encoding file");
            encode(&bytes)
        }
        None => {
            let text = text_or_stdin(options.text.as_deref())?;
            debug!(bytes = text.len(), "encoding text");
            hex_from_string(&text)
        }
    };
    Ok(format!("{}\n", hex))
}
