// Candidate profile readiness: matching eligibility and the weighted completion checklist.
// Everything here is a pure read of the profile; nothing is stored.

pub mod completeness;
pub mod handlers;
pub mod validation;
