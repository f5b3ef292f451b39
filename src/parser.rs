use std::borrow::Cow;

use crate::error::{ParseError, ParseErrorKind};
use crate::model::Entry;

/// Parse env entries from UTF-8 text.
///
/// One `KEY=VALUE` assignment per line, split on the first `=` only; the
/// value may contain further `=` characters and may be empty. Blank lines
/// yield no entry. Nothing is trimmed: whitespace around keys and values is
/// preserved as written. There is no comment, quote, or escape syntax.
///
/// Entries are returned in file order with repeated keys kept as-is, so a
/// caller installing them one by one ends up with the last occurrence.
pub fn parse_str(input: &str) -> Result<Vec<Entry>, ParseError> {
    let normalized = normalize_newlines(input);
    let input = normalized.as_ref();

    let mut entries = Vec::new();
    for (idx, line) in input.split('\n').enumerate() {
        let line_num = idx as u32 + 1;
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ParseError::new(
                line_num,
                line,
                ParseErrorKind::MissingSeparator,
            ));
        };
        if key.is_empty() {
            return Err(ParseError::new(line_num, line, ParseErrorKind::MissingKey));
        }

        entries.push(Entry {
            key: key.to_owned(),
            value: value.to_owned(),
            line: line_num,
        });
    }

    Ok(entries)
}

/// Parse env entries from UTF-8 bytes.
pub fn parse_bytes(input: &[u8]) -> Result<Vec<Entry>, crate::Error> {
    let text = std::str::from_utf8(input)?;
    parse_str(text).map_err(crate::Error::from)
}

fn normalize_newlines(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            out.push('\n');
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            continue;
        }
        out.push(ch);
    }

    Cow::Owned(out)
}
