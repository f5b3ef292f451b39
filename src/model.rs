/// A parsed `KEY=VALUE` entry from an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source file.
    pub line: u32,
}

/// Summary of a load operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Number of entries installed, repeated keys counted once per occurrence.
    pub loaded: usize,
}
