//! Readme validation.
//!
//! Checks a parsed record for missing metadata and sections. Findings are
//! graded as fatal errors, warnings, or notes; rendering them is up to the
//! caller.

use std::fmt;

use serde::Serialize;

use crate::models::{ReadmeRecord, SHORT_DESCRIPTION_LIMIT};
use crate::parsing::kinds::KnownSection;

/// One validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    MissingName,
    MissingRequires,
    MissingTested,
    MissingStableTag,
    MissingContributors,
    MissingTags,
    DescriptionFromExcerpt,
    ShortDescriptionTooLong,
    MissingInstallation,
    MissingFaq,
    MissingChangelog,
    MissingUpgradeNotice,
    UnversionedChangelog,
    UnversionedUpgradeNotice,
    MissingScreenshots,
    MissingDonateLink,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => {
                write!(f, "No plugin name detected. Plugin names look like: === Plugin Name ===")
            }
            Self::MissingRequires => write!(f, "`Requires at least` is missing"),
            Self::MissingTested => write!(f, "`Tested up to` is missing"),
            Self::MissingStableTag => write!(
                f,
                "`Stable tag` is missing. Hint: if you treat /trunk/ as stable, put `Stable tag: trunk`"
            ),
            Self::MissingContributors => write!(f, "No `Contributors` listed"),
            Self::MissingTags => write!(f, "No `Tags` specified"),
            Self::DescriptionFromExcerpt => write!(
                f,
                "No `== Description ==` section was found; the short description will be used instead"
            ),
            Self::ShortDescriptionTooLong => write!(
                f,
                "Your short description exceeds the {SHORT_DESCRIPTION_LIMIT} character limit"
            ),
            Self::MissingInstallation => write!(f, "No `== Installation ==` section was found"),
            Self::MissingFaq => {
                write!(f, "No `== Frequently Asked Questions ==` section was found")
            }
            Self::MissingChangelog => write!(f, "No `== Changelog ==` section was found"),
            Self::MissingUpgradeNotice => write!(f, "No `== Upgrade Notice ==` section was found"),
            Self::UnversionedChangelog => {
                write!(f, "One or more changelog lines were not under a version subheading")
            }
            Self::UnversionedUpgradeNotice => write!(
                f,
                "One or more upgrade notice lines were not under a version subheading"
            ),
            Self::MissingScreenshots => write!(f, "No `== Screenshots ==` section was found"),
            Self::MissingDonateLink => write!(f, "No donate link was found"),
        }
    }
}

/// Graded validation findings for one readme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub fatal_errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub notes: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.fatal_errors.is_empty() && self.warnings.is_empty() && self.notes.is_empty()
    }

    pub fn has_fatal_errors(&self) -> bool {
        !self.fatal_errors.is_empty()
    }
}

/// Validates a parsed readme.
pub fn validate(readme: &ReadmeRecord) -> ValidationReport {
    let mut report = ValidationReport::default();

    if readme.name.is_empty() {
        report.fatal_errors.push(Diagnostic::MissingName);
    }

    let warnings = [
        (readme.requires.is_empty(), Diagnostic::MissingRequires),
        (readme.tested.is_empty(), Diagnostic::MissingTested),
        (readme.stable_tag.is_empty(), Diagnostic::MissingStableTag),
        (readme.contributors.is_empty(), Diagnostic::MissingContributors),
        (readme.tags.is_empty(), Diagnostic::MissingTags),
        (readme.is_excerpt, Diagnostic::DescriptionFromExcerpt),
        (readme.is_truncated, Diagnostic::ShortDescriptionTooLong),
    ];
    report.warnings = flagged(warnings);

    let notes = [
        (
            readme.section(KnownSection::INSTALLATION).is_none(),
            Diagnostic::MissingInstallation,
        ),
        (
            readme.section(KnownSection::FREQUENTLY_ASKED_QUESTIONS).is_none(),
            Diagnostic::MissingFaq,
        ),
        (readme.changelog.is_empty(), Diagnostic::MissingChangelog),
        (readme.upgrade_notice.is_empty(), Diagnostic::MissingUpgradeNotice),
        (readme.changelog_unversioned, Diagnostic::UnversionedChangelog),
        (
            readme.upgrade_notice_unversioned,
            Diagnostic::UnversionedUpgradeNotice,
        ),
        (
            readme.section(KnownSection::SCREENSHOTS).is_none(),
            Diagnostic::MissingScreenshots,
        ),
        (readme.donate_link.is_empty(), Diagnostic::MissingDonateLink),
    ];
    report.notes = flagged(notes);

    report
}

fn flagged<const N: usize>(checks: [(bool, Diagnostic); N]) -> Vec<Diagnostic> {
    checks
        .into_iter()
        .filter_map(|(failed, diagnostic)| failed.then_some(diagnostic))
        .collect()
}
