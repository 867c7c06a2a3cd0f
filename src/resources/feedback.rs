//! Interview feedback (scorecards) resource

use super::context::{body, ResourceContext};
use crate::error::Result;
use crate::models::Feedback;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct FeedbackResource {
    ctx: ResourceContext,
}

impl FeedbackResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Every scorecard submitted for an application. One request.
    pub async fn list_for_application(&self, application_id: &str) -> Result<Vec<Feedback>> {
        self.ctx
            .fetch_many(
                "applicationFeedback.list",
                &body([("applicationId", Value::from(application_id))]),
            )
            .await
    }
}
