//! # Readme Parsing
//!
//! Multi-phase, line-oriented parsing of plugin `readme.txt` files.
//!
//! ## Phases
//!
//! 1. **Line normalization** (`lines`): input becomes trimmed lines
//! 2. **Title**: the first line, stripped of `#`, `=` and spaces
//! 3. **Header block** (`header`): `Key: value` lines up to the first blank line
//! 4. **Body** (`body`): the short description, then `== Title ==` sections
//! 5. **Assembly** (`crate::assemble`): version sub-parsing (`versions`),
//!    rendering, screenshots, and known/remaining partitioning
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter types that own their syntax (`SectionHeading`, `VersionHeading`)
//! - **`lines`**: `ReadmeSource` input forms and the `LineCursor`
//!
//! Each phase stops *before* the first line it does not own, so the next
//! phase picks up from the same cursor.

pub mod body;
pub mod header;
pub mod kinds;
pub mod lines;
pub mod versions;

#[cfg(test)]
mod tests;

use std::path::Path;

use anyhow::Context;

use crate::assemble::assemble;
use crate::error::ParseError;
use crate::io::read_readme;
use crate::models::ReadmeRecord;
use crate::render::{MarkdownRenderer, PulldownRenderer};

use body::parse_body;
use header::parse_header;
use kinds::SectionHeading;
use lines::{LineCursor, ReadmeSource};

/// Parses readmes, rendering sections with `R`.
///
/// The parser holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct ReadmeParser<R = PulldownRenderer> {
    renderer: R,
}

impl ReadmeParser<PulldownRenderer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: MarkdownRenderer> ReadmeParser<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Reads and parses the readme at `path`.
    pub fn parse_readme(&self, path: impl AsRef<Path>) -> Result<ReadmeRecord, ParseError> {
        let contents = read_readme(path.as_ref())?;
        self.parse_readme_contents(contents)
    }

    /// Parses readme text or pre-split lines.
    ///
    /// # Errors
    /// Fails only on a header line without a colon.
    pub fn parse_readme_contents(
        &self,
        contents: impl Into<ReadmeSource>,
    ) -> Result<ReadmeRecord, ParseError> {
        let lines = contents.into().into_lines();
        let mut cur = LineCursor::new(&lines);

        let name = cur
            .bump()
            .map(|line| SectionHeading::title(line).to_string())
            .unwrap_or_default();
        log::debug!("parsing readme {name:?} ({} lines)", lines.len());

        let header = parse_header(&mut cur)?;
        let body = parse_body(&mut cur);
        log::debug!("header done, {} sections in body", body.sections.len());

        Ok(assemble(&self.renderer, name, header, body))
    }

    /// Parses a readme from raw bytes, which must be UTF-8.
    pub fn parse_readme_bytes(&self, bytes: &[u8]) -> anyhow::Result<ReadmeRecord> {
        let text = std::str::from_utf8(bytes).context("readme is not valid UTF-8")?;
        Ok(self.parse_readme_contents(text)?)
    }
}

/// Parses the readme at `path` with the default renderer.
pub fn parse_readme(path: impl AsRef<Path>) -> Result<ReadmeRecord, ParseError> {
    ReadmeParser::new().parse_readme(path)
}

/// Parses readme text or lines with the default renderer.
pub fn parse_readme_contents(
    contents: impl Into<ReadmeSource>,
) -> Result<ReadmeRecord, ParseError> {
    ReadmeParser::new().parse_readme_contents(contents)
}
