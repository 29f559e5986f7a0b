//! The seed PR template and the operations that groom it.

pub mod share;
pub mod stats;
pub mod trimmer;

pub use share::{prepare_share, ShareInfo};
pub use stats::{section_stats, SectionStats};
pub use trimmer::trim_placeholders;

/// Heading lines of the default template, in document order.
pub const HEADINGS: [&str; 19] = [
    "**Summary**",
    "**Changelog & Release notes**",
    "**Impact & Risks**",
    "**Regression risks**",
    "**Security & Privacy**",
    "**Accessibility**",
    "**User Experience**",
    "**Performance**",
    "**Analytics & Monitoring**",
    "**Screenshots/Recordings**",
    "**Artifacts & References**",
    "**Tickets & Tracking**",
    "**Testing**",
    "**Manual Verification**",
    "**Documentation & Support**",
    "**Dependencies**",
    "**Feature flags**",
    "**Rollout/Follow-up**",
    "**Known issues**",
];

/// The seed document. Placeholder sections carry their canonical
/// tokens so a fresh template scans and trims meaningfully.
pub const DEFAULT_TEMPLATE: &str = "\
**Summary**
* Motivation and background.
* What changed, at a high level.

**Changelog & Release notes**
* User-facing change worth announcing.

**Impact & Risks**
* Blast radius if this regresses.

**Regression risks**
* Existing behavior most likely to break.

**Security & Privacy**
* Data handling or permission changes.

**Accessibility**
* Keyboard, contrast, and screen-reader notes.

**User Experience**
* Visible behavior changes.

**Performance**
* Hot paths touched and expected cost.

**Analytics & Monitoring**
* Dashboards or alerts to watch after rollout.

**Screenshots/Recordings**
* artifacts/filename.png

**Artifacts & References**
* File: 【F:path/to/file†L#-L#】
* Chunk: 【chunk†L#-L#】
* Link: https://link

**Tickets & Tracking**
* ABC-123

**Testing**
* ✅ `command or suite` — passed.

**Manual Verification**
* Steps a reviewer can follow.

**Documentation & Support**
* Docs or runbooks to update.

**Dependencies**
* package@version

**Feature flags**
* flag_name

**Rollout/Follow-up**
* Rollout order and cleanup tasks.

**Known issues**
* Gaps shipping as-is.
";
