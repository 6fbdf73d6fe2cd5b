// Advisory checks over a whole document. Owners call these; the editor never does.

pub mod checks;
pub mod completeness;

pub use checks::{check_document, parse_month, DocumentWarning, WarningKind, WarningSeverity};
pub use completeness::{compute_completeness, CompletenessReport, SectionHealth, SectionStatus};
