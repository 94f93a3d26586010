//! Emergency escalation checks.
//!
//! Two independent signals, both substring heuristics over lowercased text:
//! the KnowledgeBase emergency phrase set checked against extracted symptom
//! slots (or any other strings, bidirectional containment), and a hard-coded
//! keyword list checked against raw accumulated user messages (keyword
//! inside message only). The dialogue manager ORs them and owns the
//! escalation protocol itself.

use crate::knowledge::KnowledgeBase;

/// Phrases scanned against raw conversation text. Deliberately separate from
/// the KnowledgeBase emergency set: these are things people type mid-panic,
/// not clinical symptom names.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "can't breathe",
    "chest pain",
    "heart attack",
    "stroke",
    "bleeding heavily",
    "vomiting blood",
    "severe pain",
    "broken",
    "can't move",
    "suicidal",
    "emergency",
    "help me",
    "dying",
    "unconscious",
    "seizure",
    "poisoned",
];

/// True when any input string and any emergency phrase contain each other
/// after lowercasing. Short-circuits on the first hit; empty input is never
/// an emergency.
///
/// Inputs may be extracted symptom slot values or whole free-text sentences;
/// the containment test covers both shapes without special-casing.
pub fn check_emergency(kb: &KnowledgeBase, inputs: &[String]) -> bool {
    for input in inputs {
        let input = input.to_lowercase();
        for phrase in kb.emergency_symptoms() {
            let phrase = phrase.to_lowercase();
            if input.contains(&phrase) || phrase.contains(&input) {
                tracing::warn!(matched = %phrase, "emergency symptom detected");
                return true;
            }
        }
    }
    false
}

/// True when any raw user message contains an `EMERGENCY_KEYWORDS` entry.
///
/// One-directional on purpose: a message fragment contained in a keyword
/// ("pain" inside "severe pain") does not fire.
pub fn scan_conversation(messages: &[String]) -> bool {
    for message in messages {
        let message = message.to_lowercase();
        if let Some(keyword) = EMERGENCY_KEYWORDS.iter().find(|k| message.contains(**k)) {
            tracing::warn!(matched = %keyword, "emergency keyword in conversation");
            return true;
        }
    }
    false
}

/// Combined check over both signals, the way the original escalation action
/// consumed them: raw message history first, then the symptom slot values.
pub fn emergency_in_conversation(
    kb: &KnowledgeBase,
    messages: &[String],
    symptoms: &[String],
) -> bool {
    scan_conversation(messages) || check_emergency(kb, symptoms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::bundled()
    }

    #[test]
    fn chest_pain_is_an_emergency() {
        assert!(check_emergency(kb(), &strings(&["chest pain"])));
    }

    #[test]
    fn empty_input_is_never_an_emergency() {
        assert!(!check_emergency(kb(), &[]));
        assert!(!scan_conversation(&[]));
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(
            check_emergency(kb(), &strings(&["CHEST PAIN"])),
            check_emergency(kb(), &strings(&["chest pain"]))
        );
        assert!(check_emergency(kb(), &strings(&["Difficulty Breathing"])));
    }

    #[test]
    fn emergency_phrase_inside_longer_sentence_fires() {
        let texts = strings(&["i woke up with severe chest pain and sweating"]);
        assert!(check_emergency(kb(), &texts));
    }

    #[test]
    fn input_fragment_of_emergency_phrase_fires() {
        // Reverse containment: "unconscious" contains "unconscio".
        assert!(check_emergency(kb(), &strings(&["unconscio"])));
    }

    #[test]
    fn ordinary_symptoms_do_not_fire() {
        let texts = strings(&["runny nose", "sneezing", "sore throat"]);
        assert!(!check_emergency(kb(), &texts));
    }

    #[test]
    fn conversation_scan_catches_panic_language() {
        let messages = strings(&["hello", "I think I'm having a heart attack"]);
        assert!(scan_conversation(&messages));
        assert!(scan_conversation(&strings(&["please HELP ME now"])));
    }

    #[test]
    fn conversation_scan_is_one_directional() {
        // "pain" is a fragment of the "severe pain" keyword; a fragment in
        // the message must not fire the scan.
        assert!(!scan_conversation(&strings(&["pain"])));
    }

    #[test]
    fn combined_check_ors_both_signals() {
        let kb = kb();
        let calm_messages = strings(&["my nose keeps running"]);
        let calm_symptoms = strings(&["runny nose"]);
        assert!(!emergency_in_conversation(kb, &calm_messages, &calm_symptoms));

        assert!(emergency_in_conversation(
            kb,
            &strings(&["I can't breathe properly"]),
            &calm_symptoms
        ));
        assert!(emergency_in_conversation(
            kb,
            &calm_messages,
            &strings(&["severe bleeding"])
        ));
    }

    #[test]
    fn repeated_calls_agree() {
        let texts = strings(&["seizures"]);
        assert_eq!(check_emergency(kb(), &texts), check_emergency(kb(), &texts));
    }
}
