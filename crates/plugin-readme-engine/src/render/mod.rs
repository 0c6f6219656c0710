//! # Rendering
//!
//! Raw readme blocks become HTML through a narrow text-in/HTML-out
//! [`MarkdownRenderer`]. The parser never looks inside the renderer; it only
//! controls what text goes in:
//!
//! 1. **`shield`**: code markup and line-leading backtick spans are rewritten
//!    so the renderer treats them as literal code
//! 2. **sub-headings**: `= Heading =` lines become `<h4>` headings
//! 3. the renderer itself, on the trimmed text
//!
//! **`screenshots`** reads captions back out of rendered HTML.

pub mod screenshots;
pub mod shield;

use std::sync::OnceLock;

use pulldown_cmark::{Options, Parser, html};
use html_escape::encode_text;
use regex::{Captures, Regex};

pub use screenshots::extract_screenshots;
pub use shield::shield_code;

/// Converts markdown text to HTML.
///
/// Implementations must be pure: the same text always renders the same way.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

impl<F> MarkdownRenderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render(&self, text: &str) -> String {
        self(text)
    }
}

/// Markdown extensions enabled on top of CommonMark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub footnotes: bool,
    pub smart_punctuation: bool,
}

impl RenderOptions {
    fn to_pulldown(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options
    }
}

/// The default renderer, backed by `pulldown-cmark`.
///
/// Raw HTML passes through unchanged.
#[derive(Debug, Clone)]
pub struct PulldownRenderer {
    options: Options,
}

impl PulldownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options: options.to_pulldown(),
        }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options);
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

/// Converts `= Heading =` lines into `<h4>` headings on their own block.
///
/// Lines indented four or more spaces are code and are left alone.
pub fn convert_subheadings(text: &str) -> String {
    static SUBHEADING: OnceLock<Regex> = OnceLock::new();
    let re = SUBHEADING.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]{0,3}=[ \t]+(.+?)[ \t]+=[ \t]*$").expect("Invalid subheading regex")
    });
    re.replace_all(text, |caps: &Captures| {
        format!("\n<h4>{}</h4>\n", encode_text(&caps[1]))
    })
    .into_owned()
}

/// Renders one raw block: shield, sub-headings, renderer, trim.
pub fn render_block(renderer: &dyn MarkdownRenderer, raw: &str) -> String {
    let text = shield_code(raw);
    let text = convert_subheadings(&text);
    renderer.render(trim_blank_lines(&text)).trim().to_string()
}

/// Strips whole blank lines from the start and whitespace from the end.
///
/// Indentation on the first non-blank line is kept, it may be a code block.
fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    text[start..].trim_end()
}
