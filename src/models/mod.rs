//! Typed entities and the mapping from raw JSON
//!
//! Every entity implements [`FromRaw`]. Mapping never fails: missing keys
//! take documented defaults (empty string, `false`, empty list, `None`), a
//! malformed nested object becomes `None`, and each top-level entity keeps
//! the payload it was built from in its `raw` field so unmodeled data stays
//! reachable.

mod applications;
mod candidates;
mod fields;
mod jobs;
mod organization;

pub use applications::{
    Application, ApplicationFormSubmission, Feedback, FormFieldSubmission, Interview,
    InterviewSchedule, Offer,
};
pub use candidates::{Candidate, ContactPoint, EmailAddress, FileHandle, Link, Note, PhoneNumber};
pub use fields::{FromRaw, Shape};
pub use jobs::{CustomField, HiringTeamMember, InterviewStage, Job, JobPosting};
pub use organization::{
    ArchiveReason, CloseReason, CustomFieldDefinition, Department, HiringTeamRole, Location,
    Project, Source, Tag, User,
};

#[cfg(test)]
mod tests;
