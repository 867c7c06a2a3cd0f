//! Resource interfaces
//!
//! Every resource shares a [`ResourceContext`] (executor, paginator, default
//! page size). Collections with plain `list`/`get` semantics are
//! [`GenericResource`]s generated from the endpoint table in [`endpoint`];
//! the rest are hand-written because their protocol differs (write
//! operations, multi-step lookups, client-side filtering).
//!
//! Every listing comes in two forms: `stream` (lazy, page by page) and
//! `list` (collects the stream, failing on the first error).

mod applications;
mod candidates;
mod context;
pub mod endpoint;
mod feedback;
mod files;
mod generic;
mod interview_stages;
mod job_postings;
mod jobs;
mod notes;
mod surveys;

pub use applications::ApplicationsResource;
pub use candidates::CandidatesResource;
pub use context::{EntityStream, ResourceContext};
pub use endpoint::{EndpointDescriptor, GenericResources, ENDPOINTS};
pub use feedback::FeedbackResource;
pub use files::{DownloadedFile, FilesResource, DEFAULT_FILENAME};
pub use generic::GenericResource;
pub use interview_stages::InterviewStagesResource;
pub use job_postings::{JobPostingsResource, PostingSelector, TitleThenRecency};
pub use jobs::JobsResource;
pub use notes::{NoteType, NotesResource};
pub use surveys::{ParsedSubmission, SurveysResource, DEFAULT_SURVEY_TYPE};
