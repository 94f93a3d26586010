pub mod base;
mod catalog;
pub mod types;

pub use base::KnowledgeBase;
pub use types::{AilmentId, AilmentRecord};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// Lookup with an id the catalog never issued: a logic bug in the
    /// caller, not a user-facing condition.
    #[error("unknown ailment id: {0}")]
    NotFound(AilmentId),

    #[error("duplicate ailment id in catalog: {0}")]
    DuplicateId(AilmentId),

    #[error("ailment {0} has no symptoms")]
    EmptySymptoms(AilmentId),

    #[error("ailment {0} has an empty {1} entry")]
    EmptyField(AilmentId, &'static str),

    #[error("emergency symptom set is empty or contains empty phrases")]
    InvalidEmergencySet,
}
