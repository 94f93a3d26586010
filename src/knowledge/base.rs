use std::collections::HashMap;
use std::sync::LazyLock;

use super::catalog;
use super::types::{AilmentId, AilmentRecord};
use super::KnowledgeError;

/// Immutable catalog of ailments plus the emergency phrase set.
///
/// Constructed once, then shared read-only; there is no mutation API, so a
/// `&'static KnowledgeBase` can be handed to any number of worker threads.
#[derive(Debug)]
pub struct KnowledgeBase {
    records: Vec<AilmentRecord>,
    index: HashMap<AilmentId, usize>,
    emergency_symptoms: Vec<String>,
}

static BUNDLED: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::new(catalog::ailments(), catalog::emergency_symptoms())
        .expect("bundled catalog violates construction invariants")
});

impl KnowledgeBase {
    /// Build a catalog, checking the construction invariants: unique ids,
    /// non-empty symptom lists, no empty string fields, and a non-empty
    /// emergency phrase set. Record order is preserved; it is the
    /// tie-breaking order for matching and must stay deterministic.
    pub fn new(
        records: Vec<AilmentRecord>,
        emergency_symptoms: Vec<String>,
    ) -> Result<Self, KnowledgeError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.id.as_str().is_empty() {
                return Err(KnowledgeError::EmptyField(record.id.clone(), "id"));
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(KnowledgeError::DuplicateId(record.id.clone()));
            }
            if record.symptoms.is_empty() {
                return Err(KnowledgeError::EmptySymptoms(record.id.clone()));
            }
            if record.duration.is_empty() {
                return Err(KnowledgeError::EmptyField(record.id.clone(), "duration"));
            }
            for (field, values) in [
                ("symptoms", &record.symptoms),
                ("treatments", &record.treatments),
                ("medications", &record.medications),
                ("prevention", &record.prevention),
            ] {
                if values.iter().any(|value| value.is_empty()) {
                    return Err(KnowledgeError::EmptyField(record.id.clone(), field));
                }
            }
        }

        if emergency_symptoms.is_empty() || emergency_symptoms.iter().any(|s| s.is_empty()) {
            return Err(KnowledgeError::InvalidEmergencySet);
        }

        Ok(Self {
            records,
            index,
            emergency_symptoms,
        })
    }

    /// The catalog shipped with the crate, built on first access.
    pub fn bundled() -> &'static KnowledgeBase {
        &BUNDLED
    }

    /// Look up one record. An unknown id is a caller bug (ids originate from
    /// this catalog), surfaced as `KnowledgeError::NotFound`.
    pub fn get(&self, id: &AilmentId) -> Result<&AilmentRecord, KnowledgeError> {
        self.index
            .get(id)
            .map(|&position| &self.records[position])
            .ok_or_else(|| KnowledgeError::NotFound(id.clone()))
    }

    /// All records in construction order.
    pub fn all(&self) -> &[AilmentRecord] {
        &self.records
    }

    /// Phrases that trigger emergency escalation.
    pub fn emergency_symptoms(&self) -> &[String] {
        &self.emergency_symptoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, symptoms: &[&str]) -> AilmentRecord {
        AilmentRecord {
            id: AilmentId::from(id),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            treatments: vec!["Rest".into()],
            medications: vec!["Paracetamol".into()],
            duration: "2-3 days".into(),
            prevention: vec!["Wash hands".into()],
        }
    }

    fn emergency() -> Vec<String> {
        vec!["chest pain".into()]
    }

    #[test]
    fn get_returns_known_record() {
        let kb = KnowledgeBase::new(vec![record("sniffles", &["runny nose"])], emergency()).unwrap();
        let found = kb.get(&AilmentId::from("sniffles")).unwrap();
        assert_eq!(found.id.as_str(), "sniffles");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let kb = KnowledgeBase::new(vec![record("sniffles", &["runny nose"])], emergency()).unwrap();
        let err = kb.get(&AilmentId::from("gout")).unwrap_err();
        assert!(matches!(err, KnowledgeError::NotFound(_)));
    }

    #[test]
    fn all_preserves_construction_order() {
        let kb = KnowledgeBase::new(
            vec![
                record("first", &["a"]),
                record("second", &["b"]),
                record("third", &["c"]),
            ],
            emergency(),
        )
        .unwrap();
        let ids: Vec<&str> = kb.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = KnowledgeBase::new(
            vec![record("twice", &["a"]), record("twice", &["b"])],
            emergency(),
        )
        .unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateId(_)));
    }

    #[test]
    fn empty_symptom_list_is_rejected() {
        let err = KnowledgeBase::new(vec![record("hollow", &[])], emergency()).unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptySymptoms(_)));
    }

    #[test]
    fn empty_string_field_is_rejected() {
        let mut bad = record("blank", &["ache"]);
        bad.treatments.push(String::new());
        let err = KnowledgeBase::new(vec![bad], emergency()).unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptyField(_, "treatments")));
    }

    #[test]
    fn empty_emergency_set_is_rejected() {
        let err = KnowledgeBase::new(vec![record("ok", &["ache"])], Vec::new()).unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidEmergencySet));
    }

    #[test]
    fn bundled_catalog_passes_validation() {
        let kb = KnowledgeBase::bundled();
        assert!(!kb.all().is_empty());
        assert!(!kb.emergency_symptoms().is_empty());
    }
}
