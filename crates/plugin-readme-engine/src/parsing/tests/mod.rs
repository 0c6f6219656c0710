//! Whole-document tests for the parser.
//!
//! Fixtures (`.readme`) live in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::models::{ReadmeRecord, SectionMap, UNVERSIONED};
use crate::parsing::{ReadmeParser, parse_readme, parse_readme_contents};
use crate::error::ParseError;
use crate::tests::{create_test_dir, create_test_file};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.readme")).unwrap()
}

fn parse(text: &str) -> ReadmeRecord {
    parse_readme_contents(text).unwrap()
}

fn keys(map: &SectionMap) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

// Example readme

#[test]
fn example_header_fields() {
    let record = parse(&fixture("example"));

    assert_eq!(record.name, "Plugin Name");
    assert_eq!(record.contributors, vec!["markjaquith", "mdawaffe"]);
    assert_eq!(record.donate_link, "http://example.com/");
    assert_eq!(record.tags, vec!["comments", "spam"]);
    assert_eq!(record.requires, "2.0.2");
    assert_eq!(record.tested, "2.1");
    assert_eq!(record.stable_tag, "4.3");
    assert_eq!(
        record.short_description,
        "Here is a short description of the plugin.  This should be no more than 150 characters.  No markup here."
    );
}

#[test]
fn example_screenshots() {
    let record = parse(&fixture("example"));

    assert_eq!(record.screenshots.len(), 2);
    assert_eq!(
        record.screenshots[0],
        "This screen shot description corresponds to screenshot-1.(png|jpg|jpeg|gif). Note that the screenshot is taken from\nthe directory of the stable readme.txt, so in this case, <code>/tags/4.3/screenshot-1.png</code> (or jpg, jpeg, gif)"
    );
    assert_eq!(record.screenshots[1], "This is the second screen shot");
}

#[test]
fn example_sections_are_partitioned() {
    let record = parse(&fixture("example"));

    assert_eq!(
        keys(&record.sections),
        vec![
            "description",
            "installation",
            "frequently_asked_questions",
            "screenshots"
        ]
    );
    assert_eq!(
        keys(&record.remaining_content),
        vec!["arbitrary_section", "a_brief_markdown_example"]
    );
    assert!(
        record.remaining_content["arbitrary_section"]
            .starts_with("<h3>Arbitrary section</h3>\n<p>You may provide arbitrary sections")
    );
    assert!(!record.is_excerpt);
    assert!(!record.is_truncated);
}

#[test]
fn example_changelog_and_upgrade_notice() {
    let record = parse(&fixture("example"));

    assert_eq!(keys(&record.changelog), vec!["1.0", "0.5"]);
    assert_eq!(
        record.changelog["1.0"],
        "<ul>\n<li>A change since the previous version.</li>\n<li>Another change.</li>\n</ul>"
    );
    assert_eq!(keys(&record.upgrade_notice), vec!["1.0", "0.5"]);
    assert_eq!(
        record.upgrade_notice["0.5"],
        "<p>This version fixes a security related bug.  Upgrade immediately.</p>"
    );
    assert!(!record.changelog_unversioned);
    assert!(!record.upgrade_notice_unversioned);
}

#[test]
fn example_faq_questions_become_headings() {
    let record = parse(&fixture("example"));
    let faq = &record.sections["frequently_asked_questions"];

    assert!(faq.starts_with("<h4>A question that someone might have</h4>\n<p>An answer to that question.</p>"));
    assert!(faq.contains("<h4>What about foo bar?</h4>"));
}

#[test]
fn example_backtick_line_becomes_code_block() {
    let record = parse(&fixture("example"));
    let markdown = &record.remaining_content["a_brief_markdown_example"];

    assert!(markdown.ends_with("<pre><code>&lt;?php code(); // goes in backticks ?&gt;</code></pre>"));
    assert!(markdown.contains("<em>emphasis</em>"));
}

// Legacy readme

#[test]
fn legacy_header_quirks() {
    let record = parse(&fixture("legacy"));

    assert_eq!(record.name, "Legacy Widget");
    assert_eq!(record.contributors, vec!["someone", "", "other"]);
    assert!(record.tags.is_empty());
    assert_eq!(record.requires, "3.5");
    assert_eq!(record.tested, "4.0");
    assert_eq!(record.stable_tag, "");
    assert_eq!(record.short_description, "");
}

#[test]
fn legacy_faq_alias_and_no_description() {
    let record = parse(&fixture("legacy"));

    assert_eq!(keys(&record.sections), vec!["frequently_asked_questions"]);
    assert_eq!(
        record.sections["frequently_asked_questions"],
        "<h4>Why the short name?</h4>\n<p>Older readmes used it.</p>"
    );
    assert!(!record.is_excerpt);
}

#[test]
fn legacy_unversioned_content_is_kept_and_flagged() {
    let record = parse(&fixture("legacy"));

    assert!(record.changelog_unversioned);
    assert_eq!(keys(&record.changelog), vec![UNVERSIONED, "0.2"]);
    assert_eq!(
        record.changelog[UNVERSIONED],
        "<ul>\n<li>Fixed a thing without saying which version.</li>\n</ul>"
    );

    assert!(record.upgrade_notice_unversioned);
    assert_eq!(record.upgrade_notice[UNVERSIONED], "<p>Just upgrade.</p>");
}

#[test]
fn legacy_custom_section_passes_through() {
    let record = parse(&fixture("legacy"));

    assert_eq!(keys(&record.remaining_content), vec!["custom_notes"]);
    assert_eq!(
        record.remaining_content["custom_notes"],
        "<h3>Custom Notes</h3>\n<p>Notes go under their own heading.</p>"
    );
}

// Properties

#[test]
fn parsing_is_deterministic() {
    let text = fixture("example");
    assert_eq!(parse(&text), parse(&text));
}

#[test]
fn title_only_input_is_default_complete() {
    let record = parse("=== Only A Title ===");
    assert_eq!(
        record,
        ReadmeRecord {
            name: "Only A Title".to_string(),
            ..ReadmeRecord::default()
        }
    );
}

#[test]
fn empty_input_is_default() {
    assert_eq!(parse(""), ReadmeRecord::default());
}

#[test]
fn description_falls_back_to_short_description() {
    let record = parse("=== P ===\n\nA *short* one.\n\n== Installation ==\nSteps");

    assert_eq!(record.sections["description"], "<p>A <em>short</em> one.</p>");
    assert_eq!(keys(&record.sections), vec!["description", "installation"]);
    assert!(record.is_excerpt);
}

#[test]
fn faq_alias_exposes_canonical_key() {
    let record = parse("=== P ===\n\n== FAQ ==\n= Q? =\nA.");

    assert!(record.sections.contains_key("frequently_asked_questions"));
    assert!(!record.sections.contains_key("faq"));
    assert!(!record.remaining_content.contains_key("faq"));
}

#[test]
fn changelog_is_partitioned_by_version() {
    let record = parse("=== P ===\n\n== Changelog ==\n= 1.1 =\nFix\n= 1.0 =\nInitial");

    assert_eq!(keys(&record.changelog), vec!["1.1", "1.0"]);
    assert_eq!(record.changelog["1.1"], "<p>Fix</p>");
    assert_eq!(record.changelog["1.0"], "<p>Initial</p>");
    assert!(!record.sections.contains_key("changelog"));
}

#[test]
fn unknown_section_moves_to_remaining_content() {
    let record = parse("=== P ===\n\n== Custom Notes ==\nBody text");

    assert_eq!(
        record.remaining_content["custom_notes"],
        "<h3>Custom Notes</h3>\n<p>Body text</p>"
    );
    assert!(!record.sections.contains_key("custom_notes"));
}

#[test]
fn screenshots_in_source_order() {
    let record = parse("=== P ===\n\n== Screenshots ==\n1. The settings page\n2. The widget");
    assert_eq!(record.screenshots, vec!["The settings page", "The widget"]);
}

#[test]
fn no_screenshots_section_means_no_screenshots() {
    let record = parse("=== P ===\n\n== Description ==\n1. Not a screenshot");
    assert!(record.screenshots.is_empty());
}

#[test]
fn underscores_in_code_are_not_emphasis() {
    let record = parse("=== P ===\n\n== Description ==\nCall `my_function` or `_private_helper_`.");
    let description = &record.sections["description"];

    assert!(description.contains("<code>my_function</code>"));
    assert!(description.contains("<code>_private_helper_</code>"));
    assert!(!description.contains("<em>"));
}

#[test]
fn encoded_code_markup_is_restored() {
    let record = parse(
        "=== P ===\n\n== Description ==\nUse <code>if ( $a &amp;&amp; $b_c )</code> there.",
    );
    assert_eq!(
        record.sections["description"],
        "<p>Use <code>if ( $a &amp;&amp; $b_c )</code> there.</p>"
    );
}

#[test]
fn header_without_colon_fails_the_parse() {
    let result = parse_readme_contents("=== P ===\nStable tag: 1.0\nNot a header\n\nShort.");

    match result {
        Err(ParseError::MalformedHeader { line, content }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "Not a header");
        }
        other => panic!("expected malformed header, got {other:?}"),
    }
}

#[test]
fn empty_trailing_section_is_not_recorded() {
    let record = parse("=== P ===\n\n== Description ==\nText\n== Installation ==\n\n");
    assert_eq!(keys(&record.sections), vec!["description"]);
}

// Input forms

#[test]
fn text_lines_and_file_inputs_agree() {
    let text = fixture("example");
    let from_text = parse(&text);

    let lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    let from_lines = parse_readme_contents(lines).unwrap();

    let dir = create_test_dir();
    let path = create_test_file(&dir, "readme.txt", &text);
    let from_file = parse_readme(&path).unwrap();

    assert_eq!(from_text, from_lines);
    assert_eq!(from_text, from_file);
}

#[test]
fn line_endings_do_not_change_the_record() {
    let unix = fixture("legacy");
    let windows = unix.replace('\n', "\r\n");
    assert_eq!(parse(&unix), parse(&windows));
}

#[test]
fn byte_order_mark_is_ignored() {
    let dir = create_test_dir();
    let path = create_test_file(&dir, "readme.txt", "\u{feff}=== Plugin ===\nStable tag: 1.0\n\nShort.");
    let record = parse_readme(&path).unwrap();

    assert_eq!(record.name, "Plugin");
    assert_eq!(record.stable_tag, "1.0");
    assert_eq!(record.short_description, "Short.");
}

#[test]
fn sub_headings_and_section_headings_escape_alike() {
    let record = parse("=== P ===\n\n== Q & A ==\n= Q & A =\nAnswer.");

    assert_eq!(
        record.remaining_content["q_&_a"],
        "<h3>Q &amp; A</h3>\n<h4>Q &amp; A</h4>\n<p>Answer.</p>"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = create_test_dir();
    let result = parse_readme(dir.path().join("nope.txt"));
    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn bytes_must_be_utf8() {
    let parser = ReadmeParser::new();
    assert!(parser.parse_readme_bytes(&[0xff, 0xfe]).is_err());
    assert_eq!(
        parser.parse_readme_bytes(b"=== P ===").unwrap().name,
        "P"
    );
}

#[test]
fn custom_renderer_is_used_everywhere() {
    let parser = ReadmeParser::with_renderer(|text: &str| format!("[{text}]"));
    let record = parser
        .parse_readme_contents("=== P ===\n\nShort.\n\n== Changelog ==\n= 1.0 =\nDone\n== Notes ==\nN")
        .unwrap();

    assert_eq!(record.sections["description"], "[Short.]");
    assert_eq!(record.changelog["1.0"], "[Done]");
    assert_eq!(record.remaining_content["notes"], "[<h3>Notes</h3>\n\nN]");
}
