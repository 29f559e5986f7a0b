//! The fixed placeholder rule table.

use serde::Serialize;

/// A placeholder rule: a literal token plus the human copy used when
/// reporting it. Matching is literal substring search, not regex.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderRule {
    /// Stable identifier, unique within the table.
    pub id: &'static str,
    /// The literal token counted within scanned text.
    pub token: &'static str,
    /// Label when the count is exactly one.
    pub singular: &'static str,
    /// Label otherwise.
    pub plural: &'static str,
    /// Canonical example of the token as it appears in templates.
    pub example: &'static str,
    /// What the author should do about it.
    pub guidance: &'static str,
}

/// All rules, in report priority order.
pub const RULES: [PlaceholderRule; 8] = [
    PlaceholderRule {
        id: "file-citation",
        token: "F:path/to/file†L#",
        singular: "file citation placeholder",
        plural: "file citation placeholders",
        example: "【F:path/to/file†L#-L#】",
        guidance: "Cite the real file and line range you changed.",
    },
    PlaceholderRule {
        id: "chunk-citation",
        token: "chunk†L#",
        singular: "chunk citation placeholder",
        plural: "chunk citation placeholders",
        example: "【chunk†L#-L#】",
        guidance: "Cite the real output chunk and line range.",
    },
    PlaceholderRule {
        id: "generic-link",
        token: "https://link",
        singular: "stubbed link",
        plural: "stubbed links",
        example: "https://link",
        guidance: "Replace with the actual URL.",
    },
    PlaceholderRule {
        id: "screenshot",
        token: "artifacts/filename.png",
        singular: "screenshot path placeholder",
        plural: "screenshot path placeholders",
        example: "artifacts/filename.png",
        guidance: "Attach the real screenshot or recording path.",
    },
    PlaceholderRule {
        id: "testing-command",
        token: "command or suite",
        singular: "testing command stub",
        plural: "testing command stubs",
        example: "`command or suite`",
        guidance: "Name the command or suite you actually ran.",
    },
    PlaceholderRule {
        id: "ticket",
        token: "ABC-123",
        singular: "ticket reference stub",
        plural: "ticket reference stubs",
        example: "ABC-123",
        guidance: "Link the real tracking ticket.",
    },
    PlaceholderRule {
        id: "feature-flag",
        token: "flag_name",
        singular: "feature flag stub",
        plural: "feature flag stubs",
        example: "flag_name",
        guidance: "Name the real flag guarding this change.",
    },
    PlaceholderRule {
        id: "dependency",
        token: "package@version",
        singular: "dependency stub",
        plural: "dependency stubs",
        example: "package@version",
        guidance: "Pin the real package and version.",
    },
];

/// Look a rule up by its id.
pub fn rule_by_id(id: &str) -> Option<&'static PlaceholderRule> {
    RULES.iter().find(|r| r.id == id)
}
