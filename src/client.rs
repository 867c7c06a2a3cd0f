//! Client facade
//!
//! [`AshbyClient`] validates configuration up front (credential, base URL),
//! builds one instance of every resource, and offers a few compositions that
//! chain resource calls.

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ReqwestTransport, RequestExecutor, Transport};
use crate::models::{Application, Candidate, InterviewStage, Note};
use crate::resources::{
    ApplicationsResource, CandidatesResource, DownloadedFile, EndpointDescriptor,
    FeedbackResource, FilesResource, GenericResources, InterviewStagesResource,
    JobPostingsResource, JobsResource, NoteType, NotesResource, ParsedSubmission,
    ResourceContext, SurveysResource, ENDPOINTS,
};
use std::sync::Arc;
use tracing::debug;

/// Typed client for the Ashby API
///
/// # Example
///
/// ```rust,ignore
/// use ashby_client::AshbyClient;
///
/// let client = AshbyClient::new(None)?; // reads ASHBY_API_KEY
/// let open = client.jobs.list(&["Open"]).await?;
/// let funnel = client.get_job_funnel(&open[0].id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct AshbyClient {
    pub jobs: JobsResource,
    pub applications: ApplicationsResource,
    pub candidates: CandidatesResource,
    pub interview_stages: InterviewStagesResource,
    pub job_postings: JobPostingsResource,
    pub files: FilesResource,
    pub surveys: SurveysResource,
    pub notes: NotesResource,
    pub feedback: FeedbackResource,
    /// Collections with plain list/get semantics (sources, departments, ...)
    pub generic: GenericResources,
    ctx: ResourceContext,
}

impl AshbyClient {
    /// Create a client from the environment, with an optional explicit key.
    ///
    /// Fails with `Unauthenticated` when no key is given and none is set.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        let mut config = ClientConfig::from_env();
        if let Some(key) = api_key {
            config.api_key = Some(key.to_string());
        }
        Self::from_config(config)
    }

    /// Create a client over the default reqwest transport
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        // Credential and URL problems surface before a transport is built
        config.credential()?;
        config.parsed_base_url()?;
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let authenticator = Authenticator::new(config.credential()?)?;
        let base_url = config.parsed_base_url()?;
        debug!(base_url = %base_url, page_size = config.page_size, "Creating Ashby client");

        let executor = RequestExecutor::new(base_url, authenticator, transport);
        let ctx = ResourceContext::new(executor, config.page_size);

        Ok(Self {
            jobs: JobsResource::new(ctx.clone()),
            applications: ApplicationsResource::new(ctx.clone()),
            candidates: CandidatesResource::new(ctx.clone()),
            interview_stages: InterviewStagesResource::new(ctx.clone()),
            job_postings: JobPostingsResource::new(ctx.clone()),
            files: FilesResource::new(ctx.clone()),
            surveys: SurveysResource::new(ctx.clone()),
            notes: NotesResource::new(ctx.clone()),
            feedback: FeedbackResource::new(ctx.clone()),
            generic: GenericResources::new(&ctx),
            ctx,
        })
    }

    /// Base URL requests go to
    pub fn base_url(&self) -> &str {
        self.ctx.executor().base_url()
    }

    /// The generic endpoint table
    pub fn endpoints(&self) -> &'static [EndpointDescriptor] {
        ENDPOINTS
    }

    // ========================================================================
    // Compositions
    // ========================================================================

    /// Application with its candidate populated
    pub async fn get_application_with_candidate(&self, application_id: &str) -> Result<Application> {
        let mut application = self.applications.get(application_id, false).await?;
        if !application.candidate_id.is_empty() {
            application.candidate = Some(self.candidates.get(&application.candidate_id).await?);
        }
        Ok(application)
    }

    /// Current interview stage of an application
    pub async fn get_application_stage(&self, application_id: &str) -> Result<Option<InterviewStage>> {
        Ok(self.applications.get(application_id, false).await?.current_stage)
    }

    pub async fn move_application_to_stage(
        &self,
        application_id: &str,
        interview_stage_id: &str,
    ) -> Result<Application> {
        self.applications
            .change_stage(application_id, interview_stage_id)
            .await
    }

    /// Ordered interview stages of a job
    pub async fn get_job_funnel(&self, job_id: &str) -> Result<Vec<InterviewStage>> {
        self.interview_stages.list_for_job(job_id).await
    }

    /// Download a candidate's resume; `None` when they have none on file
    pub async fn download_resume(&self, candidate: &Candidate) -> Result<Option<DownloadedFile>> {
        match candidate.resume_handle() {
            Some(handle) => self.files.download(handle).await.map(Some),
            None => Ok(None),
        }
    }

    /// Description of a job's posting
    pub async fn get_job_description(&self, job_id: &str) -> Result<Option<String>> {
        self.job_postings.get_description(job_id).await
    }

    pub async fn create_candidate_note(
        &self,
        candidate_id: &str,
        text: &str,
        note_type: NoteType,
    ) -> Result<Note> {
        self.notes.create(candidate_id, text, note_type).await
    }

    /// Application form answers, one entry per expanded submission
    pub async fn get_application_answers(&self, application_id: &str) -> Result<Vec<ParsedSubmission>> {
        let application = self.applications.get_with_forms(application_id).await?;
        Ok(application
            .form_submissions
            .iter()
            .map(SurveysResource::parse_submission)
            .collect())
    }
}
