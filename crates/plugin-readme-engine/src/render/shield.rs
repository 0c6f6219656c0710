//! Code-block shield.
//!
//! Readme code comes in three shapes: HTML `<code>` markup (often entity
//! encoded by an earlier round-trip), inline backtick spans, and backtick
//! spans starting a line that are meant as code blocks. Before rendering,
//! HTML code markup is turned back into backticks with its entities decoded,
//! and line-leading backtick spans become indented code blocks. Both keep
//! underscores and ampersands in code away from emphasis and entity handling.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::lines::normalize_line_endings;

/// Indentation the renderer reads as a literal code block.
pub const CODE_INDENT: &str = "    ";

/// Runs both shield transforms, in order.
pub fn shield_code(text: &str) -> String {
    let text = restore_code_markup(text);
    let text = normalize_line_endings(&text);
    indent_line_code(&text)
}

/// Rewrites `<code>…</code>` and `<pre><code>…</code></pre>` as backtick
/// spans, decoding HTML entities and dropping `<br />` tags inside.
///
/// The block form keeps a blank line inside each backtick so the result
/// still reads as a block.
pub fn restore_code_markup(text: &str) -> String {
    static CODE_MARKUP: OnceLock<Regex> = OnceLock::new();
    let re = CODE_MARKUP.get_or_init(|| {
        Regex::new(r"(?s)(<pre><code>|<code>)(.*?)(</code></pre>|</code>)")
            .expect("Invalid code markup regex")
    });

    re.replace_all(text, |caps: &Captures<'_>| {
        let code = html_escape::decode_html_entities(&caps[2])
            .replace("<br />", "")
            .replace("<br/>", "")
            .replace("<br>", "");
        if &caps[1] == "<pre><code>" {
            format!("`\n{code}\n`")
        } else {
            format!("`{code}`")
        }
    })
    .into_owned()
}

/// Turns single-backtick spans that begin a line into indented code blocks.
///
/// Each line of the span is prefixed with the span's own leading whitespace
/// plus [`CODE_INDENT`]. Empty spans (the first two ticks of a ``` fence)
/// are left alone.
pub fn indent_line_code(text: &str) -> String {
    static LINE_CODE: OnceLock<Regex> = OnceLock::new();
    let re = LINE_CODE
        .get_or_init(|| Regex::new(r"(?s)(^|\n)([ \t]*)`(.*?)`").expect("Invalid line code regex"));

    re.replace_all(text, |caps: &Captures<'_>| {
        let code = &caps[3];
        if code.is_empty() {
            return caps[0].to_string();
        }
        let prefix = format!("{}{CODE_INDENT}", &caps[2]);
        format!("{}{}", &caps[1], indent_lines(code, &prefix))
    })
    .into_owned()
}

/// Prefixes every line, except the empty remainder after a final newline.
fn indent_lines(text: &str, prefix: &str) -> String {
    let segments: Vec<&str> = text.split('\n').collect();
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i == last && i > 0 && segment.is_empty() {
                String::new()
            } else {
                format!("{prefix}{segment}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
