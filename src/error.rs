use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The source file could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source file is not valid UTF-8.
    InvalidEncoding(std::str::Utf8Error),
    /// A line in the source file is malformed.
    Parse(ParseError),
    /// `unset` was called for a key the store does not hold.
    KeyNotFound(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read env file `{}`: {source}", path.display())
            }
            Self::InvalidEncoding(err) => write!(f, "invalid UTF-8 input: {err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::KeyNotFound(key) => write!(f, "key `{key}` not found in store"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEncoding(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::KeyNotFound(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(value: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: u32,
    pub content: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: u32, content: &str, kind: ParseErrorKind) -> Self {
        Self {
            line,
            content: content.to_owned(),
            kind,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parse error at line {} (`{}`): {}",
            self.line, self.content, self.kind
        )
    }
}

impl StdError for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A non-blank line without any `=` separator.
    MissingSeparator,
    /// A line whose key part before the first `=` is empty.
    MissingKey,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing `=` separator"),
            Self::MissingKey => write!(f, "missing key"),
        }
    }
}
