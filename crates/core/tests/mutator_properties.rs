use prdraft_core::section::{
    append_to_section, merge_insights, section, section_body, AppendOutcome, Placement,
};
use prdraft_core::template::DEFAULT_TEMPLATE;
use rstest::rstest;

const FILLED: &str = include_str!("fixtures/filled_pr.md");

// === Append visibility ===

#[rstest]
#[case(DEFAULT_TEMPLATE, "**Testing**", "* ✅ `cargo nextest run` — passed.")]
#[case(FILLED, "**Summary**", "* Follow-up: document the parser limits.")]
#[case(FILLED, "**Rollout/Follow-up**", "* Flip the flag in staging first.")]
#[case("", "**Testing**", "* ✅ done")]
fn appended_line_is_readable_back(
    #[case] doc: &str,
    #[case] heading: &str,
    #[case] line: &str,
) {
    let result = append_to_section(doc, heading, line, Placement::End);
    assert_eq!(result.outcome, AppendOutcome::Appended);
    let body = section_body(&result.doc, heading).unwrap();
    assert!(body.contains(line), "body {body:?} should contain {line:?}");
}

// === Idempotent insertion ===

#[test]
fn repeated_append_is_a_noop_after_the_first() {
    let first = append_to_section(FILLED, "**Testing**", "* ✅ re-ran on CI.", Placement::End);
    assert_eq!(first.outcome, AppendOutcome::Appended);

    let second =
        append_to_section(&first.doc, "**Testing**", "* ✅ re-ran on CI.", Placement::End);
    assert_eq!(second.outcome, AppendOutcome::Duplicate);
    assert_eq!(second.doc, first.doc);
}

#[test]
fn lines_already_in_the_template_are_duplicates() {
    let result = append_to_section(
        DEFAULT_TEMPLATE,
        "**Summary**",
        "* Motivation and background.",
        Placement::End,
    );
    assert_eq!(result.outcome, AppendOutcome::Duplicate);
    assert_eq!(result.doc, DEFAULT_TEMPLATE);
}

// === Untouched neighbors ===

#[test]
fn other_sections_are_preserved_verbatim() {
    let result =
        append_to_section(FILLED, "**Testing**", "* ✅ new evidence.", Placement::End);
    for heading in ["**Summary**", "**Impact & Risks**", "**Known issues**"] {
        assert_eq!(section(&result.doc, heading), section(FILLED, heading));
    }
}

// === Insights merge ===

#[test]
fn merge_into_template_summary_appends_in_place() {
    let report = merge_insights(DEFAULT_TEMPLATE, "Reviewer: call out the cache change.\n");
    assert_eq!(report.appended, 1);
    let body = section_body(&report.doc, "**Summary**").unwrap();
    assert!(body.contains("Reviewer: call out the cache change."));
    // Summary already existed, so the document still starts with it.
    assert!(report.doc.starts_with("**Summary**"));
}

#[test]
fn merge_creates_a_leading_summary_when_absent() {
    let doc = "**Testing**\n* ✅ done\n";
    let report = merge_insights(doc, "Adds retries to the uploader.");
    assert!(report.doc.starts_with("**Summary**\nAdds retries to the uploader."));
}
