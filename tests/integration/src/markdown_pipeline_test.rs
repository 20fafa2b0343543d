//! End-to-end tests with a real Markdown parser
//!
//! These tests run the repairs around `pulldown-cmark`: protect, render to
//! HTML, restore.

use md_repair::{PlaceholderProtector, ProtectorState, RepairConfig, repair_document};
use md_repair_test_utils::config::TestConfigDir;
use md_repair_test_utils::parsers::tag_splitting;
use pretty_assertions::assert_eq;
use pulldown_cmark::{Parser, html};

fn markdown_to_html(markdown: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(markdown));
    out
}

#[test]
fn test_inline_text_and_code() {
    let result = repair_document(
        "Contact `team@example.org` or team@example.org.",
        &markdown_to_html,
    );
    insta::assert_snapshot!(
        result.trim_end(),
        @"<p>Contact <code>team&#64;example.org</code> or team&#64;example.org.</p>"
    );
}

#[test]
fn test_literal_marker_survives_rendering() {
    let result = repair_document("Write {-at-} to get a marker.", &markdown_to_html);
    insta::assert_snapshot!(result.trim_end(), @"<p>Write {-at-} to get a marker.</p>");
}

#[test]
fn test_list_and_heading() {
    let source = "# Usage\n\n- `@Override` annotations\n- mail: a@b.c\n";
    let result = repair_document(source, &markdown_to_html);
    assert_eq!(
        result,
        "<h1>Usage</h1>\n<ul>\n<li><code>&#64;Override</code> annotations</li>\n<li>mail: a&#64;b.c</li>\n</ul>\n"
    );
}

#[test]
fn test_fenced_code_block() {
    let source = "```\n@Test\nvoid run() {}\n```\n";
    let result = repair_document(source, &markdown_to_html);
    assert_eq!(
        result,
        "<pre><code>&#64;Test\nvoid run() {}\n</code></pre>\n"
    );
}

#[test]
fn test_tag_sensitive_stage_before_markdown() {
    // A comment parser that stops at the first line starting with '@',
    // followed by the Markdown renderer.
    let pipeline = |s: &str| markdown_to_html(&tag_splitting(s));
    let source = "Annotate with\n@Inject\nto wire it.";

    assert_eq!(pipeline(source), "<p>Annotate with</p>\n");
    assert_eq!(
        repair_document(source, &pipeline),
        "<p>Annotate with\n&#64;Inject\nto wire it.</p>\n"
    );
}

#[test]
fn test_fragments_of_one_document_share_a_protector() {
    let mut protector = PlaceholderProtector::new();
    let summary = protector.protect("Owned by @core.");
    let body = protector.protect("See {-at-} and ops@example.org.");

    let summary_html = markdown_to_html(&summary);
    let body_html = markdown_to_html(&body);

    assert_eq!(
        protector.restore(&summary_html),
        "<p>Owned by &#64;core.</p>\n"
    );
    assert_eq!(
        protector.restore(&body_html),
        "<p>See {-at-} and ops&#64;example.org.</p>\n"
    );
    assert_eq!(protector.state(), ProtectorState::Empty);
}

#[test]
fn test_config_driven_chain() {
    let dir = TestConfigDir::with_config(
        r#"
[logging]
level = "warn"

[at_symbol]
marker = "%%at%%"
restored_form = "&commat;"
"#,
    );
    let config = RepairConfig::load(dir.config_path()).unwrap();
    let mut chain = config.chain().unwrap();

    let result = chain.convert("Ping @ops.", &markdown_to_html);
    insta::assert_snapshot!(result.trim_end(), @"<p>Ping &commat;ops.</p>");
}
