use thiserror::Error;

/// Validation failures raised while turning a request into a seating plan.
///
/// Every variant is a caller-input problem; the first one detected aborts
/// the whole computation and no partial plan is returned alongside it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllotmentError {
    /// A required top-level field is absent or unusable.
    #[error("{0}")]
    MissingInput(String),

    /// A cohort definition that cannot produce a roster.
    #[error("invalid cohort {name}: {reason}")]
    MalformedCohort { name: String, reason: String },

    /// A room whose declared geometry is inconsistent.
    #[error("invalid room {name}: {reason}")]
    MalformedRoom { name: String, reason: String },

    /// A common-paper group naming a cohort that was never defined.
    #[error("common paper group '{group}' references undefined cohort '{member}'")]
    UnknownGroupMember { group: String, member: String },
}
