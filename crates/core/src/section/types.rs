use serde::Serialize;

/// Where a newly created section is placed in the document.
///
/// Existing sections are always mutated in place; placement only
/// applies when the target heading is absent and a section must be
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Prepend the new section at the start of the document.
    Start,
    /// Append the new section at the end of the document.
    #[default]
    End,
}

/// What an append operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendOutcome {
    /// The line was inserted (into an existing or freshly created section).
    Appended,
    /// The section body already contained the line; document unchanged.
    Duplicate,
    /// The line was empty or whitespace-only; document unchanged.
    Unavailable,
}

impl AppendOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            AppendOutcome::Appended => "appended",
            AppendOutcome::Duplicate => "duplicate",
            AppendOutcome::Unavailable => "unavailable",
        }
    }
}

/// Result of an append operation.
#[derive(Debug, Clone)]
pub struct AppendResult {
    /// The resulting document (byte-identical to the input on no-ops).
    pub doc: String,
    pub outcome: AppendOutcome,
}

impl AppendResult {
    pub fn changed(&self) -> bool {
        self.outcome == AppendOutcome::Appended
    }
}

/// Result of merging insight lines into the Summary section.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// The resulting document.
    pub doc: String,
    /// Lines actually inserted.
    pub appended: usize,
    /// Lines skipped because the section already contained them.
    pub duplicates: usize,
}

impl MergeReport {
    pub fn changed(&self) -> bool {
        self.appended > 0
    }
}
