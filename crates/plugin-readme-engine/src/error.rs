use crate::io::IoError;

/// Errors that abort a readme parse.
///
/// Everything else the parser meets (missing headers, missing sections,
/// stray blank lines, unversioned changelog text) degrades to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A non-blank line in the header block has no `:` separator.
    #[error("Malformed header on line {line}: expected `Key: value`, found {content:?}")]
    MalformedHeader { line: usize, content: String },
    #[error(transparent)]
    Io(#[from] IoError),
}
