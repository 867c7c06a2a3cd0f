//! Jobs resource

use super::context::{body, EntityStream, ResourceContext};
use crate::error::Result;
use crate::models::Job;
use crate::types::JsonObject;
use futures::TryStreamExt;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct JobsResource {
    ctx: ResourceContext,
}

impl JobsResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Lazily page through jobs, optionally restricted to some statuses
    /// (`Open`, `Closed`, `Draft`, `Archived`)
    pub fn stream(&self, statuses: &[&str]) -> EntityStream<Job> {
        let mut params = JsonObject::new();
        if !statuses.is_empty() {
            params.insert("status".to_string(), Value::from(statuses.to_vec()));
        }
        self.ctx.stream("job.list", params, None)
    }

    pub async fn list(&self, statuses: &[&str]) -> Result<Vec<Job>> {
        self.stream(statuses).try_collect().await
    }

    pub async fn get(&self, job_id: &str) -> Result<Job> {
        self.ctx
            .fetch_one("job.info", &body([("id", Value::from(job_id))]))
            .await
    }
}
