pub mod advisory;
pub mod emergency;
pub mod matching;
pub mod slots;

pub use advisory::{advice_for, AdviceReport, CareNote, MedicationAdvice};
pub use emergency::{check_emergency, emergency_in_conversation, scan_conversation};
pub use matching::{identify_ailment, rank_matches, MatchResult};
pub use slots::{resolve_duration, resolve_severity, Severity};
