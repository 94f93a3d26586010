//! Advice assembly for an identified ailment.
//!
//! Builds the structured report the external renderer formats into chat
//! messages. No message text is produced here; the renderer owns wording,
//! emoji, and localization.

use serde::Serialize;

use super::slots::Severity;
use crate::knowledge::{AilmentId, KnowledgeBase, KnowledgeError};

/// The renderer shows at most this many symptom phrases before collapsing
/// the rest into an "and N more" line.
const LEADING_SYMPTOM_LIMIT: usize = 5;

/// Dosage guidance for common over-the-counter analgesics. A guide entry
/// applies when its key is contained in the lowercased medication name;
/// first hit wins. Everything else falls back to package instructions.
struct OtcGuideEntry {
    key: &'static str,
    dosage: &'static str,
    notes: &'static str,
}

const OTC_GUIDE: &[OtcGuideEntry] = &[
    OtcGuideEntry {
        key: "paracetamol",
        dosage: "500-1000mg every 6 hours (max 4g/day)",
        notes: "Good for pain and fever. Take with food if stomach sensitive.",
    },
    OtcGuideEntry {
        key: "ibuprofen",
        dosage: "400-600mg every 6-8 hours (max 2.4g/day)",
        notes: "Anti-inflammatory. Take with food. Avoid if stomach ulcers.",
    },
    OtcGuideEntry {
        key: "aspirin",
        dosage: "300-600mg every 4 hours (max 4g/day)",
        notes: "Avoid if under 16. Take with food.",
    },
];

/// Severity-dependent guidance marker attached to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CareNote {
    /// Mild symptoms: home remedies are likely sufficient, monitor and
    /// escalate if things worsen.
    MonitorAtHome,
    /// Severe symptoms: consider seeking medical attention sooner.
    SeekCareSooner,
}

/// One catalog medication with any resolved dosage guidance. `dosage` and
/// `notes` are both absent when no guide entry applies; the renderer then
/// points at the package instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationAdvice {
    pub name: String,
    pub dosage: Option<String>,
    pub notes: Option<String>,
}

/// Everything the renderer needs to present one identified ailment.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceReport {
    pub ailment: AilmentId,
    pub display_name: String,
    pub duration: String,
    /// First few catalog symptom phrases, presentation order.
    pub leading_symptoms: Vec<String>,
    /// Count of catalog symptoms beyond `leading_symptoms`.
    pub additional_symptoms: usize,
    pub treatments: Vec<String>,
    pub medications: Vec<MedicationAdvice>,
    pub prevention: Vec<String>,
    pub care_note: Option<CareNote>,
}

fn medication_advice(name: &str) -> MedicationAdvice {
    let lower = name.to_lowercase();
    let entry = OTC_GUIDE.iter().find(|e| lower.contains(e.key));
    MedicationAdvice {
        name: name.to_string(),
        dosage: entry.map(|e| e.dosage.to_string()),
        notes: entry.map(|e| e.notes.to_string()),
    }
}

fn care_note(severity: Option<Severity>) -> Option<CareNote> {
    match severity? {
        Severity::Mild => Some(CareNote::MonitorAtHome),
        Severity::Moderate => None,
        Severity::Severe => Some(CareNote::SeekCareSooner),
    }
}

/// Assemble the advice report for an identified ailment.
///
/// `id` is expected to come from `identify_ailment` against the same
/// catalog; an unknown id propagates `KnowledgeError::NotFound`, which the
/// caller should treat as an invariant violation rather than user input
/// gone wrong.
pub fn advice_for(
    kb: &KnowledgeBase,
    id: &AilmentId,
    severity: Option<Severity>,
) -> Result<AdviceReport, KnowledgeError> {
    let record = kb.get(id)?;

    let leading: Vec<String> = record
        .symptoms
        .iter()
        .take(LEADING_SYMPTOM_LIMIT)
        .cloned()
        .collect();

    Ok(AdviceReport {
        ailment: record.id.clone(),
        display_name: record.id.display_name(),
        duration: record.duration.clone(),
        additional_symptoms: record.symptoms.len().saturating_sub(leading.len()),
        leading_symptoms: leading,
        treatments: record.treatments.clone(),
        medications: record.medications.iter().map(|m| medication_advice(m)).collect(),
        prevention: record.prevention.clone(),
        care_note: care_note(severity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::bundled()
    }

    #[test]
    fn report_carries_catalog_data_in_order() {
        let report = advice_for(kb(), &AilmentId::from("common_cold"), None).unwrap();
        assert_eq!(report.display_name, "Common Cold");
        assert_eq!(report.duration, "5-7 days");
        assert_eq!(report.treatments[0], "Rest");
        assert_eq!(report.prevention.len(), 3);
    }

    #[test]
    fn leading_symptoms_are_capped_at_five() {
        // common_cold lists six symptoms; one collapses into the count.
        let report = advice_for(kb(), &AilmentId::from("common_cold"), None).unwrap();
        assert_eq!(report.leading_symptoms.len(), 5);
        assert_eq!(report.additional_symptoms, 1);

        // asthma_attack lists four; nothing collapses.
        let report = advice_for(kb(), &AilmentId::from("asthma_attack"), None).unwrap();
        assert_eq!(report.leading_symptoms.len(), 4);
        assert_eq!(report.additional_symptoms, 0);
    }

    #[test]
    fn known_otc_medications_resolve_dosage() {
        let report = advice_for(kb(), &AilmentId::from("common_cold"), None).unwrap();
        let paracetamol = report
            .medications
            .iter()
            .find(|m| m.name == "Paracetamol")
            .unwrap();
        assert_eq!(
            paracetamol.dosage.as_deref(),
            Some("500-1000mg every 6 hours (max 4g/day)")
        );
        assert!(paracetamol.notes.as_deref().unwrap().contains("pain and fever"));
    }

    #[test]
    fn guide_lookup_is_substring_based() {
        // "Aspirin" appears inside a longer free-text medication name.
        let advice = medication_advice("Low-dose Aspirin (if advised)");
        assert_eq!(advice.dosage.as_deref(), Some("300-600mg every 4 hours (max 4g/day)"));
    }

    #[test]
    fn unknown_medications_have_no_dosage() {
        let report = advice_for(kb(), &AilmentId::from("common_cold"), None).unwrap();
        let decongestants = report
            .medications
            .iter()
            .find(|m| m.name == "Decongestants")
            .unwrap();
        assert_eq!(decongestants.dosage, None);
        assert_eq!(decongestants.notes, None);
    }

    #[test]
    fn care_note_tracks_severity() {
        let id = AilmentId::from("flu");
        let severe = advice_for(kb(), &id, Some(Severity::Severe)).unwrap();
        assert_eq!(severe.care_note, Some(CareNote::SeekCareSooner));

        let mild = advice_for(kb(), &id, Some(Severity::Mild)).unwrap();
        assert_eq!(mild.care_note, Some(CareNote::MonitorAtHome));

        let moderate = advice_for(kb(), &id, Some(Severity::Moderate)).unwrap();
        assert_eq!(moderate.care_note, None);

        let unknown = advice_for(kb(), &id, None).unwrap();
        assert_eq!(unknown.care_note, None);
    }

    #[test]
    fn unknown_id_surfaces_not_found() {
        let err = advice_for(kb(), &AilmentId::from("dragon_pox"), None).unwrap_err();
        assert!(matches!(err, KnowledgeError::NotFound(_)));
    }

    #[test]
    fn report_serializes_for_the_host() {
        let report = advice_for(kb(), &AilmentId::from("migraine"), Some(Severity::Severe)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ailment"], "migraine");
        assert_eq!(json["display_name"], "Migraine");
        assert_eq!(json["care_note"], "SeekCareSooner");
    }
}
