//! Job postings resource
//!
//! A job can have several postings (e.g. differently titled listings for
//! different markets) and the API does not say which one is canonical.
//! [`PostingSelector`] decides; [`TitleThenRecency`] is the default.

use super::context::{body, EntityStream, ResourceContext};
use crate::error::Result;
use crate::models::{Job, JobPosting};
use crate::types::JsonObject;
use futures::{future, StreamExt, TryStreamExt};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Picks one posting out of several for the same job
pub trait PostingSelector: Send + Sync {
    /// Choose one posting; `None` only for an empty slice. `job_title` is
    /// the job's canonical title when known.
    fn select<'a>(&self, postings: &'a [JobPosting], job_title: Option<&str>) -> Option<&'a JobPosting>;
}

/// Default selection: the only posting, else an exact title match, else
/// the most recently updated posting (first one wins on ties)
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleThenRecency;

impl PostingSelector for TitleThenRecency {
    fn select<'a>(&self, postings: &'a [JobPosting], job_title: Option<&str>) -> Option<&'a JobPosting> {
        if let [only] = postings {
            return Some(only);
        }

        if let Some(title) = job_title.filter(|t| !t.is_empty()) {
            if let Some(exact) = postings.iter().find(|p| p.title == title) {
                return Some(exact);
            }
        }

        let latest = postings.iter().rev().max_by(|a, b| compare_recency(a, b));
        if let Some(posting) = latest {
            warn!(
                job_id = %posting.job_id,
                candidates = postings.len(),
                chosen = %posting.id,
                "No posting title matched; using most recently updated"
            );
        }
        latest
    }
}

/// Compare by parsed `updatedAt`, falling back to the raw strings when
/// either side does not parse. Missing timestamps sort oldest.
fn compare_recency(a: &JobPosting, b: &JobPosting) -> Ordering {
    match (a.updated_time(), b.updated_time()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a
            .updated_at
            .as_deref()
            .unwrap_or_default()
            .cmp(b.updated_at.as_deref().unwrap_or_default()),
    }
}

#[derive(Clone)]
pub struct JobPostingsResource {
    ctx: ResourceContext,
    selector: Arc<dyn PostingSelector>,
}

impl JobPostingsResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self {
            ctx,
            selector: Arc::new(TitleThenRecency),
        }
    }

    /// Replace the posting selection policy
    #[must_use]
    pub fn with_selector(mut self, selector: Arc<dyn PostingSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Lazily page through postings.
    ///
    /// `jobPosting.list` ignores a `jobId` filter server-side, so every posting is
    /// fetched and the job filter is applied here.
    pub fn stream(&self, job_id: Option<&str>) -> EntityStream<JobPosting> {
        let postings: EntityStream<JobPosting> = self.ctx.stream("jobPosting.list", JsonObject::new(), None);
        match job_id.filter(|id| !id.is_empty()) {
            Some(job_id) => {
                let job_id = job_id.to_string();
                postings
                    .try_filter(move |p| future::ready(p.job_id == job_id))
                    .boxed()
            }
            None => postings,
        }
    }

    pub async fn list(&self, job_id: Option<&str>) -> Result<Vec<JobPosting>> {
        self.stream(job_id).try_collect().await
    }

    /// Fetch a posting with its description
    pub async fn get(&self, posting_id: &str) -> Result<JobPosting> {
        self.ctx
            .fetch_one(
                "jobPosting.info",
                &body([("jobPostingId", Value::from(posting_id))]),
            )
            .await
    }

    /// The posting for a job, fully fetched.
    ///
    /// `None` when the job has no postings.
    pub async fn get_for_job(&self, job_id: &str, job_title: Option<&str>) -> Result<Option<JobPosting>> {
        let postings = self.list(Some(job_id)).await?;
        let Some(chosen) = self.selector.select(&postings, job_title) else {
            debug!(job_id, "No postings for job");
            return Ok(None);
        };
        debug!(job_id, posting_id = %chosen.id, "Selected job posting");
        self.get(&chosen.id).await.map(Some)
    }

    /// Description of a job's posting.
    ///
    /// Looks up the job's title first so the right posting is matched.
    pub async fn get_description(&self, job_id: &str) -> Result<Option<String>> {
        let job: Job = self
            .ctx
            .fetch_one("job.info", &body([("id", Value::from(job_id))]))
            .await?;
        let title = Some(job.title.as_str()).filter(|t| !t.is_empty());
        let posting = self.get_for_job(job_id, title).await?;
        Ok(posting.and_then(|p| p.description()))
    }
}

impl fmt::Debug for JobPostingsResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobPostingsResource").finish_non_exhaustive()
    }
}
