//! Symptom-to-ailment matching.
//!
//! Scoring is a deliberate substring heuristic, not token or edit-distance
//! matching: a user symptom matches a catalog phrase when either string
//! contains the other after lowercasing. Short generic words ("pain") will
//! match many ailments; that fuzziness is part of the contract and callers
//! downstream depend on it.

use serde::Serialize;

use crate::knowledge::{AilmentId, KnowledgeBase};

/// Per-ailment scoring outcome for one `rank_matches` call. Transient:
/// computed, ranked, and discarded once the winning id is returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub ailment: AilmentId,
    /// Number of user symptoms that matched this ailment. Each user symptom
    /// counts at most once, even if it matches several catalog phrases.
    pub score: usize,
    /// Size of the ailment's catalog symptom list.
    pub total_symptoms: usize,
    /// `score / total_symptoms * 100`.
    pub match_percentage: f64,
    /// `score / user symptom count * 100`.
    pub user_match_percentage: f64,
}

/// Score every catalog ailment against the user's symptoms and return the
/// candidates (score > 0) ranked by descending `(score, match_percentage)`.
///
/// The sort is stable, so ailments tied on both keys keep the catalog's
/// enumeration order and the first-inserted ailment wins. Empty input
/// yields an empty ranking.
pub fn rank_matches(kb: &KnowledgeBase, symptoms: &[String]) -> Vec<MatchResult> {
    if symptoms.is_empty() {
        return Vec::new();
    }

    let user: Vec<String> = symptoms.iter().map(|s| s.to_lowercase()).collect();
    let mut results = Vec::new();

    for record in kb.all() {
        let phrases: Vec<String> = record.symptoms.iter().map(|s| s.to_lowercase()).collect();

        // First containment hit per user symptom ends the phrase scan for
        // that symptom.
        let score = user
            .iter()
            .filter(|symptom| {
                phrases
                    .iter()
                    .any(|phrase| symptom.contains(phrase.as_str()) || phrase.contains(symptom.as_str()))
            })
            .count();

        if score == 0 {
            continue;
        }

        results.push(MatchResult {
            ailment: record.id.clone(),
            score,
            total_symptoms: record.symptoms.len(),
            match_percentage: score as f64 / record.symptoms.len() as f64 * 100.0,
            user_match_percentage: score as f64 / user.len() as f64 * 100.0,
        });
    }

    results.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    results
}

/// Identify the most likely ailment for the reported symptoms, or `None`
/// when nothing in the catalog overlaps (a normal outcome, not an error).
///
/// `duration` and `severity` are accepted for interface compatibility with
/// the dialogue manager's slot set but do not influence scoring; the
/// original engine never consulted them and that behavior is preserved.
pub fn identify_ailment(
    kb: &KnowledgeBase,
    symptoms: &[String],
    _duration: Option<&str>,
    _severity: Option<&str>,
) -> Option<AilmentId> {
    let ranked = rank_matches(kb, symptoms);
    match ranked.first() {
        Some(best) => {
            tracing::debug!(
                candidates = ranked.len(),
                winner = %best.ailment,
                score = best.score,
                "ailment identified"
            );
            Some(best.ailment.clone())
        }
        None => {
            tracing::debug!(symptoms = symptoms.len(), "no catalog ailment matched");
            None
        }
    }
}
