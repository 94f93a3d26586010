use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog ailment, e.g. `"common_cold"`.
///
/// Ids are lowercase snake_case and unique within a catalog. The id is the
/// only handle the dialogue manager holds between identifying an ailment and
/// asking for its advice data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AilmentId(String);

impl AilmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable heading for the renderer: underscores become spaces,
    /// each word is capitalized. `"common_cold"` → `"Common Cold"`.
    pub fn display_name(&self) -> String {
        self.0
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for AilmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AilmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One catalog entry: a condition with its canonical symptom phrases and the
/// advice data the renderer needs. Immutable after catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AilmentRecord {
    pub id: AilmentId,
    /// Canonical symptom phrases, lowercase free text. Never empty.
    pub symptoms: Vec<String>,
    /// Home-care instructions, in presentation order.
    pub treatments: Vec<String>,
    /// Medication names, free text (dosage-agnostic).
    pub medications: Vec<String>,
    /// Typical duration, free text (e.g. "5-7 days", "Chronic condition").
    pub duration: String,
    /// Prevention tips, in presentation order.
    pub prevention: Vec<String>,
}
