use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from a section key or version label to its text.
///
/// Insertion order is source order.
pub type SectionMap = IndexMap<String, String>;

/// Key under which changelog or upgrade-notice text that precedes any
/// `= Version =` heading is kept.
pub const UNVERSIONED: &str = "";

/// Short descriptions longer than this many characters are flagged.
pub const SHORT_DESCRIPTION_LIMIT: usize = 150;

/// The structured form of a plugin readme.
///
/// Every field is always present: scalars default to `""`, sequences and
/// maps default to empty, flags default to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeRecord {
    /// Title line with `#`, `=` and spaces trimmed from both ends.
    pub name: String,
    pub tags: Vec<String>,
    pub requires: String,
    pub tested: String,
    pub stable_tag: String,
    pub donate_link: String,
    pub contributors: Vec<String>,
    /// Raw trimmed text between the header block and the first section.
    pub short_description: String,
    /// Rendered HTML of the known sections, keyed by normalized title.
    pub sections: SectionMap,
    /// Rendered HTML per changelog version, in source order.
    pub changelog: SectionMap,
    /// Rendered HTML per upgrade-notice version, in source order.
    pub upgrade_notice: SectionMap,
    /// Screenshot captions, in source order.
    pub screenshots: Vec<String>,
    /// Rendered HTML of every section outside the known set.
    pub remaining_content: SectionMap,
    /// The `description` section was synthesized from the short description.
    pub is_excerpt: bool,
    /// The short description exceeds [`SHORT_DESCRIPTION_LIMIT`] characters.
    pub is_truncated: bool,
    /// Changelog text was found outside any version heading.
    pub changelog_unversioned: bool,
    /// Upgrade-notice text was found outside any version heading.
    pub upgrade_notice_unversioned: bool,
}

impl ReadmeRecord {
    /// Returns the rendered HTML of a known section, if present.
    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }
}
