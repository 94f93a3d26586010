//! Slot value resolution for the symptom form.
//!
//! The dialogue manager hands over raw slot text; these helpers either
//! normalize it or resolve to `None`, which tells the manager to re-prompt.
//! Nothing here is an error condition.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Self-rated symptom severity. Closed set; parsing is case-insensitive,
/// display is the lowercase word the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Resolution scan order matters: the original validator checked mild,
    /// then moderate, then severe, and kept the first word found.
    const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    /// Exact case-insensitive match against the three severity words.
    fn parse(value: &str) -> Option<Severity> {
        let lower = value.to_lowercase();
        Self::ALL.into_iter().find(|s| s.as_str() == lower)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the severity slot. A slot value equal (case-insensitively) to one
/// of the severity words wins; otherwise the latest raw user utterance is
/// scanned for a severity word as a substring. `None` means re-prompt.
pub fn resolve_severity(slot: Option<&str>, latest_message: &str) -> Option<Severity> {
    if let Some(severity) = slot.and_then(Severity::parse) {
        return Some(severity);
    }

    let lower = latest_message.to_lowercase();
    Severity::ALL.into_iter().find(|s| lower.contains(s.as_str()))
}

// Substring test, not word-boundary: "3 days ago" and "yesterdays" both
// pass, matching the original validator.
static DURATION_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)hours|days|weeks|ago").expect("invalid duration pattern"));

/// Accept a free-text duration only when it mentions a recognizable time
/// word. `None` means re-prompt.
pub fn resolve_duration(slot: Option<&str>) -> Option<String> {
    let value = slot?;
    if DURATION_WORDS.is_match(value) {
        Some(value.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_severity_values_normalize() {
        assert_eq!(resolve_severity(Some("mild"), ""), Some(Severity::Mild));
        assert_eq!(resolve_severity(Some("SEVERE"), ""), Some(Severity::Severe));
        assert_eq!(resolve_severity(Some("Moderate"), ""), Some(Severity::Moderate));
    }

    #[test]
    fn invalid_slot_falls_back_to_latest_message() {
        let resolved = resolve_severity(Some("kinda bad"), "I feel pretty severe pain");
        assert_eq!(resolved, Some(Severity::Severe));
    }

    #[test]
    fn missing_slot_also_scans_message() {
        assert_eq!(
            resolve_severity(None, "it's only MILD really"),
            Some(Severity::Mild)
        );
    }

    #[test]
    fn unresolvable_severity_is_none() {
        assert_eq!(resolve_severity(Some("kinda bad"), "it just hurts"), None);
        assert_eq!(resolve_severity(None, ""), None);
    }

    #[test]
    fn message_scan_keeps_first_severity_word() {
        // mild is checked before severe.
        assert_eq!(
            resolve_severity(None, "started mild but now severe"),
            Some(Severity::Mild)
        );
    }

    #[test]
    fn severity_is_word_not_phrase() {
        // The slot must equal the word exactly; "severely bad" only resolves
        // through the message scan.
        assert_eq!(resolve_severity(Some("severely bad"), ""), None);
        assert_eq!(
            resolve_severity(Some("severely bad"), "severely bad"),
            Some(Severity::Severe)
        );
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Severe).unwrap(), "\"severe\"");
        assert_eq!(Severity::Mild.to_string(), "mild");
    }

    #[test]
    fn durations_with_time_words_pass() {
        assert_eq!(resolve_duration(Some("2 days")).as_deref(), Some("2 days"));
        assert_eq!(
            resolve_duration(Some("a few hours ago")).as_deref(),
            Some("a few hours ago")
        );
        assert_eq!(resolve_duration(Some("Three WEEKS")).as_deref(), Some("Three WEEKS"));
    }

    #[test]
    fn vague_durations_are_rejected() {
        assert_eq!(resolve_duration(Some("a while")), None);
        assert_eq!(resolve_duration(Some("since yesterday morning")), None);
        assert_eq!(resolve_duration(None), None);
    }
}
