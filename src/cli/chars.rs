use crate::charset::CharClass;
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// JSON shape of `chars --json`
#[derive(Debug, Serialize)]
struct ClassListing<'a> {
    class: CharClass,
    members: &'a [String],
}

/// Options for the chars command
#[derive(Debug, Clone)]
pub struct CharsOptions {
    pub class: CharClass,
    /// Stop after this many characters
    pub limit: Option<usize>,
    /// Emit a JSON array of strings instead of one character per line
    pub json: bool,
}

impl Default for CharsOptions {
    fn default() -> Self {
        Self {
            class: CharClass::AsciiDigits,
            limit: None,
            json: false,
        }
    }
}

/// List the members of a character class
pub fn run_chars(options: &CharsOptions) -> Result<String> {
    let members: Vec<String> = options
        .class
        .characters()
        .take(options.limit.unwrap_or(usize::MAX))
        .map(String::from)
        .collect();
    debug!(class = %options.class, count = members.len(), "enumerated class");

    if options.json {
        let listing = ClassListing {
            class: options.class,
            members: &members,
        };
        let mut output = serde_json::to_string(&listing)?;
        output.push('\n');
        return Ok(output);
    }

    let mut output = String::new();
    for member in &members {
        output.push_str(member);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_lines() {
        let output = run_chars(&CharsOptions::default()).unwrap();
        assert_eq!(output.lines().count(), 10);
        assert!(output.starts_with("0\n1\n"));
    }

    #[test]
    fn test_chars_limit() {
        let options = CharsOptions {
            class: CharClass::Letters,
            limit: Some(3),
            ..Default::default()
        };
        assert_eq!(run_chars(&options).unwrap(), "A\nB\nC\n");
    }

    #[test]
    fn test_chars_json() {
        let options = CharsOptions {
            class: CharClass::HexDigits,
            limit: Some(4),
            json: true,
        };
        assert_eq!(
            run_chars(&options).unwrap(),
            "{\"class\":\"hex\",\"members\":[\"0\",\"1\",\"2\",\"3\"]}\n"
        );
    }
}
