//! Salus: symptom-to-ailment matching and emergency detection for a
//! student health advisory assistant.
//!
//! The crate is the decision core behind a conversational health helper: the
//! surrounding dialogue manager extracts symptom/duration/severity slots
//! from the conversation and calls in here to find the most likely ailment,
//! to spot emergencies that must bypass normal advice, and to assemble the
//! structured treatment/medication/prevention data a renderer turns into
//! chat messages.
//!
//! Everything is a pure function over the immutable [`knowledge::KnowledgeBase`]:
//! no I/O, no state, no async. The bundled catalog is built once behind a
//! lazy static and can be shared freely across threads.
//!
//! ```
//! use salus::knowledge::KnowledgeBase;
//! use salus::triage;
//!
//! let kb = KnowledgeBase::bundled();
//! let symptoms = vec!["runny nose".to_string(), "sneezing".to_string()];
//!
//! assert!(!triage::check_emergency(kb, &symptoms));
//! let ailment = triage::identify_ailment(kb, &symptoms, None, None).unwrap();
//! let report = triage::advice_for(kb, &ailment, None).unwrap();
//! assert_eq!(report.display_name, "Common Cold");
//! ```

pub mod knowledge;
pub mod triage;
