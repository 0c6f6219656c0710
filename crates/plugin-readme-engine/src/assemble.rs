//! Final merge of the parsed pieces into a [`ReadmeRecord`].
//!
//! Order matters: the description fallback and FAQ alias run on raw text,
//! the version sub-parsers pull their sections out before rendering, and
//! screenshots are read from the rendered HTML before sections are split
//! into known and remaining content.

use crate::models::{ReadmeRecord, SHORT_DESCRIPTION_LIMIT, SectionMap};
use crate::parsing::body::Body;
use crate::parsing::header::HeaderBlock;
use crate::parsing::kinds::KnownSection;
use crate::parsing::versions::{VersionNotes, parse_versions};
use crate::render::{MarkdownRenderer, extract_screenshots, render_block};

/// Builds the record from the title, header block, and raw body.
pub fn assemble(
    renderer: &dyn MarkdownRenderer,
    name: String,
    header: HeaderBlock,
    body: Body,
) -> ReadmeRecord {
    let Body {
        short_description,
        mut sections,
    } = body;

    let is_excerpt = apply_description_fallback(&mut sections, &short_description);
    alias_faq(&mut sections);

    let changelog = take_versions(&mut sections, KnownSection::CHANGELOG);
    let upgrade_notice = take_versions(&mut sections, KnownSection::UPGRADE_NOTICE);

    let sections = render_map(renderer, sections);
    let screenshots = sections
        .get(KnownSection::SCREENSHOTS)
        .map(|html| extract_screenshots(html))
        .unwrap_or_default();
    let (sections, remaining_content) = partition_known(sections);

    ReadmeRecord {
        name,
        tags: header.tags,
        requires: header.requires,
        tested: header.tested,
        stable_tag: header.stable_tag,
        donate_link: header.donate_link,
        contributors: header.contributors,
        is_truncated: short_description.chars().count() > SHORT_DESCRIPTION_LIMIT,
        short_description,
        sections,
        changelog: render_map(renderer, changelog.entries),
        upgrade_notice: render_map(renderer, upgrade_notice.entries),
        screenshots,
        remaining_content,
        is_excerpt,
        changelog_unversioned: changelog.unversioned,
        upgrade_notice_unversioned: upgrade_notice.unversioned,
    }
}

/// Uses the short description as the description when none was given.
///
/// The fallback goes first, in place of the preamble it came from. Returns
/// whether it was applied.
fn apply_description_fallback(sections: &mut SectionMap, short_description: &str) -> bool {
    if sections.contains_key(KnownSection::DESCRIPTION) || short_description.is_empty() {
        return false;
    }
    sections.shift_insert(
        0,
        KnownSection::DESCRIPTION.to_string(),
        short_description.to_string(),
    );
    true
}

/// Renames `faq` to `frequently_asked_questions` in place, unless the
/// canonical key is already present.
fn alias_faq(sections: &mut SectionMap) {
    if sections.contains_key(KnownSection::FREQUENTLY_ASKED_QUESTIONS) {
        return;
    }
    if let Some((index, _, text)) = sections.shift_remove_full(KnownSection::FAQ) {
        sections.shift_insert(
            index,
            KnownSection::FREQUENTLY_ASKED_QUESTIONS.to_string(),
            text,
        );
    }
}

/// Removes a section and splits its raw text into version entries.
fn take_versions(sections: &mut SectionMap, key: &str) -> VersionNotes {
    sections
        .shift_remove(key)
        .map(|raw| parse_versions(&raw))
        .unwrap_or_default()
}

fn render_map(renderer: &dyn MarkdownRenderer, raw: SectionMap) -> SectionMap {
    raw.into_iter()
        .map(|(key, text)| {
            let html = render_block(renderer, &text);
            (key, html)
        })
        .collect()
}

/// Splits rendered sections into (known, remaining), keeping order within
/// each.
fn partition_known(sections: SectionMap) -> (SectionMap, SectionMap) {
    sections
        .into_iter()
        .partition(|(key, _)| KnownSection::contains(key))
}
