//! Interview stages resource

use super::context::{body, EntityStream, ResourceContext};
use crate::error::Result;
use crate::models::{InterviewStage, Job};
use futures::TryStreamExt;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct InterviewStagesResource {
    ctx: ResourceContext,
}

impl InterviewStagesResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Lazily page through the stages of an interview plan
    pub fn stream(&self, interview_plan_id: &str) -> EntityStream<InterviewStage> {
        self.ctx.stream(
            "interviewStage.list",
            body([("interviewPlanId", Value::from(interview_plan_id))]),
            None,
        )
    }

    pub async fn list(&self, interview_plan_id: &str) -> Result<Vec<InterviewStage>> {
        self.stream(interview_plan_id).try_collect().await
    }

    pub async fn get(&self, stage_id: &str) -> Result<InterviewStage> {
        self.ctx
            .fetch_one(
                "interviewStage.info",
                &body([("interviewStageId", Value::from(stage_id))]),
            )
            .await
    }

    /// Stages of a job's interview plan, in funnel order.
    ///
    /// Empty when the job has no plan. Stages without an order sort as zero;
    /// equal orders keep server order.
    pub async fn list_for_job(&self, job_id: &str) -> Result<Vec<InterviewStage>> {
        let job: Job = self
            .ctx
            .fetch_one("job.info", &body([("id", Value::from(job_id))]))
            .await?;

        let Some(plan_id) = job.interview_plan_id() else {
            debug!(job_id, "Job has no interview plan");
            return Ok(Vec::new());
        };

        let mut stages = self.list(plan_id).await?;
        stages.sort_by_key(InterviewStage::sort_order);
        Ok(stages)
    }
}
