// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_readme(versions: usize) -> String {
    let mut content = String::from(
        "=== Bench Plugin ===\nContributors: alice, bob\nTags: bench, speed\nRequires at least: 5.0\nTested up to: 6.4\nStable tag: 1.0\n\nA plugin that only exists to be parsed.\n\n",
    );
    content.push_str(&generate_sections(versions / 10 + 1));
    content.push_str("== Changelog ==\n\n");
    for version in (0..versions).rev() {
        content.push_str(&format!(
            "= 1.{version} =\n* Fixed `some_function_{version}` when called twice.\n* Another change.\n\n"
        ));
    }
    content
}

#[allow(dead_code)]
fn generate_sections(count: usize) -> String {
    let mut content = String::new();

    for section in 0..count {
        content.push_str(&format!("== Section {section} ==\n\n"));
        content.push_str("Some paragraph content with *emphasis* and a [link](https://example.com/).\n\n");
        content.push_str("= A sub heading =\n\n");
        for i in 0..3 {
            content.push_str(&format!("* Item {i} in section {section}\n"));
        }
        content.push('\n');
        content.push_str("`<?php do_action( 'bench_hook' ); ?>`\n\n");
    }

    content
}
