//! Candidates resource

use super::context::{body, EntityStream, ResourceContext};
use crate::error::{Error, Result};
use crate::models::Candidate;
use crate::types::JsonObject;
use futures::TryStreamExt;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CandidatesResource {
    ctx: ResourceContext,
}

impl CandidatesResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub fn stream(&self) -> EntityStream<Candidate> {
        self.ctx.stream("candidate.list", JsonObject::new(), None)
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        self.stream().try_collect().await
    }

    pub async fn get(&self, candidate_id: &str) -> Result<Candidate> {
        self.ctx
            .fetch_one("candidate.info", &body([("id", Value::from(candidate_id))]))
            .await
    }

    /// Find candidates by email and/or name.
    ///
    /// At least one criterion is required; given both, the server matches
    /// candidates satisfying both. One request, no pagination.
    pub async fn search(&self, email: Option<&str>, name: Option<&str>) -> Result<Vec<Candidate>> {
        let mut params = JsonObject::new();
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            params.insert("email".to_string(), Value::from(email));
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            params.insert("name".to_string(), Value::from(name));
        }
        if params.is_empty() {
            return Err(Error::validation(
                "candidate search requires an email or a name",
            ));
        }
        self.ctx.fetch_many("candidate.search", &params).await
    }

    /// Tag a candidate; returns the updated candidate
    pub async fn add_tag(&self, candidate_id: &str, tag_id: &str) -> Result<Candidate> {
        info!(candidate_id, tag_id, "Adding candidate tag");
        self.ctx
            .fetch_one(
                "candidate.addTag",
                &body([
                    ("candidateId", Value::from(candidate_id)),
                    ("tagId", Value::from(tag_id)),
                ]),
            )
            .await
    }
}
