pub mod chars;
pub mod decode;
pub mod encode;
pub mod scramble;

pub use chars::*;
pub use decode::*;
pub use encode::*;
pub use scramble::*;

use crate::error::Result;
use std::io::Read;

/// Use `text` if given, otherwise read all of stdin
///
/// One trailing line break is dropped from stdin so that `echo foo |`
/// behaves like passing `foo` directly.
pub(crate) fn text_or_stdin(text: Option<&str>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(strip_line_break(buf))
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
