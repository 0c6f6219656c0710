/// `== Title ==` section delimiter.
///
/// All section-heading syntax knowledge lives here, not in the sectionizer.
pub struct SectionHeading;

impl SectionHeading {
    /// A line starting with this opens a new section.
    pub const DELIMITER: &'static str = "==";

    /// Characters stripped from both ends of a heading line to get its title.
    pub const TITLE_TRIM: [char; 3] = ['#', '=', ' '];

    /// Returns true if the line opens a section.
    pub fn is_delimiter(line: &str) -> bool {
        line.starts_with(Self::DELIMITER)
    }

    /// Extracts the display title from a delimiter line.
    pub fn title(line: &str) -> &str {
        line.trim_matches(Self::TITLE_TRIM)
    }

    /// Normalizes a display title into a section key.
    pub fn key(title: &str) -> String {
        title.to_lowercase().replace(' ', "_")
    }
}

/// Section keys with dedicated handling during assembly.
pub struct KnownSection;

impl KnownSection {
    pub const DESCRIPTION: &'static str = "description";
    pub const INSTALLATION: &'static str = "installation";
    pub const FAQ: &'static str = "faq";
    pub const FREQUENTLY_ASKED_QUESTIONS: &'static str = "frequently_asked_questions";
    pub const SCREENSHOTS: &'static str = "screenshots";
    pub const CHANGELOG: &'static str = "changelog";
    pub const UPGRADE_NOTICE: &'static str = "upgrade_notice";

    pub const ALL: [&'static str; 7] = [
        Self::DESCRIPTION,
        Self::INSTALLATION,
        Self::FAQ,
        Self::FREQUENTLY_ASKED_QUESTIONS,
        Self::SCREENSHOTS,
        Self::CHANGELOG,
        Self::UPGRADE_NOTICE,
    ];

    pub fn contains(key: &str) -> bool {
        Self::ALL.contains(&key)
    }
}
