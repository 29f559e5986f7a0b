//! Scanning text for placeholder tokens and formatting the findings.

use crate::placeholder::rules::{PlaceholderRule, RULES};
use serde::Serialize;

/// One rule's findings in a scanned text.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderWarning {
    #[serde(flatten)]
    pub rule: &'static PlaceholderRule,
    /// Non-overlapping occurrences of the token.
    pub count: usize,
}

impl PlaceholderWarning {
    /// Singular or plural label depending on the count.
    pub fn label(&self) -> &'static str {
        if self.count == 1 {
            self.rule.singular
        } else {
            self.rule.plural
        }
    }

    fn counted_label(&self) -> String {
        format!("{} {}", self.count, self.label())
    }
}

/// Scan `text` against the rule table, in declaration order, omitting
/// rules with zero matches.
pub fn scan(text: &str) -> Vec<PlaceholderWarning> {
    RULES
        .iter()
        .filter_map(|rule| {
            let count = text.matches(rule.token).count();
            if count > 0 {
                Some(PlaceholderWarning { rule, count })
            } else {
                None
            }
        })
        .collect()
}

/// Join counted, pluralized labels into a human-readable list.
///
/// Two items join as `"A and B"`; three or more as `"A, B, and C"`; an
/// empty slice yields `""`.
pub fn summary(warnings: &[PlaceholderWarning]) -> String {
    let parts: Vec<String> = warnings.iter().map(PlaceholderWarning::counted_label).collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} and {b}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

/// `"Resolve <summary>"`, or `""` when there is nothing to resolve.
pub fn action_text(warnings: &[PlaceholderWarning]) -> String {
    if warnings.is_empty() {
        String::new()
    } else {
        format!("Resolve {}", summary(warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::rules::rule_by_id;

    #[test]
    fn file_citation_bullet_counts_once() {
        let warnings = scan("* File: 【F:path/to/file†L#-L#】");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].rule.id, "file-citation");
        assert_eq!(warnings[0].count, 1);
    }

    #[test]
    fn counts_are_per_occurrence() {
        let warnings = scan("ABC-123 and ABC-123 and flag_name");
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].rule.id, "ticket");
        assert_eq!(warnings[0].count, 2);
        assert_eq!(warnings[1].rule.id, "feature-flag");
        assert_eq!(warnings[1].count, 1);
    }

    #[test]
    fn clean_text_has_no_warnings() {
        assert!(scan("**Summary**\n* Real prose only.\n").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn order_follows_rule_declaration() {
        let warnings = scan("package@version then ABC-123 then https://link");
        let ids: Vec<_> = warnings.iter().map(|w| w.rule.id).collect();
        assert_eq!(ids, vec!["generic-link", "ticket", "dependency"]);
    }

    #[test]
    fn two_item_summary_uses_plain_and() {
        let warnings = vec![
            PlaceholderWarning { rule: rule_by_id("ticket").unwrap(), count: 1 },
            PlaceholderWarning { rule: rule_by_id("feature-flag").unwrap(), count: 1 },
        ];
        assert_eq!(summary(&warnings), "1 ticket reference stub and 1 feature flag stub");
    }

    #[test]
    fn three_item_summary_uses_serial_comma() {
        let warnings = vec![
            PlaceholderWarning { rule: rule_by_id("ticket").unwrap(), count: 2 },
            PlaceholderWarning { rule: rule_by_id("feature-flag").unwrap(), count: 1 },
            PlaceholderWarning { rule: rule_by_id("dependency").unwrap(), count: 3 },
        ];
        assert_eq!(
            summary(&warnings),
            "2 ticket reference stubs, 1 feature flag stub, and 3 dependency stubs"
        );
    }

    #[test]
    fn action_text_prefixes_resolve() {
        let warnings = scan("ABC-123");
        assert_eq!(action_text(&warnings), "Resolve 1 ticket reference stub");
        assert_eq!(action_text(&[]), "");
    }
}
