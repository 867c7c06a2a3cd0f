//! Applications resource
//!
//! Besides listing and fetching, this is where the funnel is driven:
//! `change_stage` and `archive` both return the application as the server
//! sees it after the write.

use super::context::{body, EntityStream, ResourceContext};
use crate::error::Result;
use crate::models::Application;
use crate::types::JsonObject;
use futures::TryStreamExt;
use serde_json::{json, Value};
use tracing::info;

const FORM_SUBMISSIONS_EXPANSION: &str = "applicationFormSubmissions";

#[derive(Debug, Clone)]
pub struct ApplicationsResource {
    ctx: ResourceContext,
}

impl ApplicationsResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Lazily page through applications, optionally for one job
    pub fn stream(&self, job_id: Option<&str>) -> EntityStream<Application> {
        let mut params = JsonObject::new();
        if let Some(job_id) = job_id.filter(|id| !id.is_empty()) {
            params.insert("jobId".to_string(), Value::from(job_id));
        }
        self.ctx.stream("application.list", params, None)
    }

    pub async fn list(&self, job_id: Option<&str>) -> Result<Vec<Application>> {
        self.stream(job_id).try_collect().await
    }

    /// Fetch an application, optionally expanding its form submissions
    pub async fn get(&self, application_id: &str, expand_forms: bool) -> Result<Application> {
        let mut params = body([("applicationId", Value::from(application_id))]);
        if expand_forms {
            params.insert("expand".to_string(), json!([FORM_SUBMISSIONS_EXPANSION]));
        }
        self.ctx.fetch_one("application.info", &params).await
    }

    pub async fn get_with_forms(&self, application_id: &str) -> Result<Application> {
        self.get(application_id, true).await
    }

    /// Move an application to another interview stage
    pub async fn change_stage(
        &self,
        application_id: &str,
        interview_stage_id: &str,
    ) -> Result<Application> {
        info!(application_id, interview_stage_id, "Changing application stage");
        self.ctx
            .fetch_one(
                "application.changeStage",
                &body([
                    ("applicationId", Value::from(application_id)),
                    ("interviewStageId", Value::from(interview_stage_id)),
                ]),
            )
            .await
    }

    /// Archive (reject) an application with a reason
    pub async fn archive(
        &self,
        application_id: &str,
        archive_reason_id: &str,
    ) -> Result<Application> {
        info!(application_id, archive_reason_id, "Archiving application");
        self.ctx
            .fetch_one(
                "application.update",
                &body([
                    ("applicationId", Value::from(application_id)),
                    ("isArchived", Value::Bool(true)),
                    ("archiveReasonId", Value::from(archive_reason_id)),
                ]),
            )
            .await
    }
}
