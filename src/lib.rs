//! Minimal `.env`-backed environment variable store.
//!
//! [`EnvStore`] is a process-isolated in-memory map populated from a
//! line-oriented `KEY=VALUE` file and mutated through explicit
//! get/set/unset calls.
//!
//! The format is deliberately bare: split each non-blank line on the first
//! `=`, keep everything else as written. No comments, no quoting, no
//! interpolation, no trimming.
//!
//! The [`process`] module is the opt-in bridge to the real process
//! environment; the store itself never touches it.

mod error;
mod model;
mod parser;
pub mod process;
mod store;

pub use error::{Error, ParseError, ParseErrorKind};
pub use model::{Entry, LoadReport};
pub use parser::{parse_bytes, parse_str};
pub use store::{DEFAULT_FILE, EnvStore, dotenv};
