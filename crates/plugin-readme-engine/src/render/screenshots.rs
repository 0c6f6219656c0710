use std::sync::OnceLock;

use regex::Regex;

/// Extracts the trimmed inner HTML of every `<li>` in rendered HTML, in
/// document order.
///
/// Loose list items wrap their text in a single `<p>`; that wrapper is
/// dropped so tight and loose lists give the same captions.
pub fn extract_screenshots(html: &str) -> Vec<String> {
    static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
    let re = LIST_ITEM.get_or_init(|| {
        Regex::new(r"(?s)<li(?:\s[^>]*)?>(.*?)</li>").expect("Invalid list item regex")
    });

    re.captures_iter(html)
        .map(|caps| unwrap_paragraph(caps[1].trim()).to_string())
        .collect()
}

fn unwrap_paragraph(item: &str) -> &str {
    item.strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        .filter(|inner| !inner.contains("<p>"))
        .map(str::trim)
        .unwrap_or(item)
}
