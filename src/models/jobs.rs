//! Jobs, postings, and the interview funnel

use super::fields::{Fields, FromRaw};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("HTML tag pattern is valid"));

// ============================================================================
// Job
// ============================================================================

/// An open or closed requisition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub status: String,
    pub confidential: bool,
    pub employment_type: Option<String>,
    pub department_id: Option<String>,
    pub location_id: Option<String>,
    pub job_posting_ids: Vec<String>,
    pub hiring_team: Vec<HiringTeamMember>,
    pub custom_fields: Vec<CustomField>,
    pub default_interview_plan_id: Option<String>,
    pub interview_plan_ids: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub opened_at: Option<String>,
    pub closed_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl Job {
    /// Interview plan driving this job's funnel: the default plan, else the
    /// first associated plan
    pub fn interview_plan_id(&self) -> Option<&str> {
        self.default_interview_plan_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.interview_plan_ids.first().map(String::as_str))
    }
}

impl FromRaw for Job {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            title: f.string("title"),
            status: f.string("status"),
            confidential: f.flag("confidential", false),
            employment_type: f.opt_string("employmentType"),
            department_id: f.opt_string("departmentId"),
            location_id: f.opt_string("locationId"),
            job_posting_ids: f.strings("jobPostingIds"),
            hiring_team: f.list("hiringTeam"),
            custom_fields: f.list("customFields"),
            default_interview_plan_id: f.opt_string("defaultInterviewPlanId"),
            interview_plan_ids: f.strings("interviewPlanIds"),
            created_at: f.opt_string("createdAt"),
            updated_at: f.opt_string("updatedAt"),
            opened_at: f.opt_string("openedAt"),
            closed_at: f.opt_string("closedAt"),
            raw: raw.clone(),
        }
    }
}

/// Member of a job's hiring team
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringTeamMember {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl FromRaw for HiringTeamMember {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            user_id: f.string("userId"),
            first_name: f.string("firstName"),
            last_name: f.string("lastName"),
            email: f.string("email"),
            role: f.string("role"),
        }
    }
}

/// Custom field value attached to a job or candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomField {
    pub id: String,
    pub title: String,
    pub value: Option<Value>,
}

impl FromRaw for CustomField {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            title: f.string("title"),
            value: f.value("value").cloned(),
        }
    }
}

// ============================================================================
// Job Posting
// ============================================================================

/// Market-facing listing of a job. One job may have several.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub job_id: String,
    pub location_ids: Vec<String>,
    pub is_listed: bool,
    pub is_live: bool,
    pub employment_type: Option<String>,
    pub description_plain: Option<String>,
    pub description_html: Option<String>,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl JobPosting {
    /// Description text: plain text if present, else the HTML with every tag
    /// replaced by a space
    pub fn description(&self) -> Option<String> {
        if let Some(plain) = self.description_plain.as_deref().filter(|s| !s.is_empty()) {
            return Some(plain.to_string());
        }
        self.description_html
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|html| HTML_TAG.replace_all(html, " ").into_owned())
    }

    /// `updatedAt` parsed as an RFC 3339 timestamp
    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
    }
}

impl FromRaw for JobPosting {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            title: f.string("title"),
            job_id: f.string("jobId"),
            location_ids: f.strings("locationIds"),
            is_listed: f.flag("isListed", true),
            is_live: f.flag("isLive", true),
            employment_type: f.opt_string("employmentType"),
            description_plain: f.opt_string("descriptionPlain"),
            description_html: f.opt_string("descriptionHtml"),
            published_at: f.opt_string("publishedAt"),
            updated_at: f.opt_string("updatedAt"),
            raw: raw.clone(),
        }
    }
}

// ============================================================================
// Interview Stage
// ============================================================================

/// One step of an interview plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStage {
    pub id: String,
    pub name: String,
    pub order_in_stage_group: Option<i64>,
    pub stage_group_id: Option<String>,
    pub stage_group_name: Option<String>,
    /// e.g. `PreInterviewScreen`, `Active`, `Offer`, `Hired`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub interview_plan_id: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl InterviewStage {
    /// Sort key; a missing order counts as zero
    pub fn sort_order(&self) -> i64 {
        self.order_in_stage_group.unwrap_or(0)
    }
}

impl FromRaw for InterviewStage {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        let group = f.object("interviewStageGroup");
        Self {
            id: f.string("id"),
            name: f.first_string(&["title", "name"]),
            // A zero group order defers to the plan order
            order_in_stage_group: f
                .opt_i64("orderInStageGroup")
                .filter(|n| *n != 0)
                .or_else(|| f.opt_i64("orderInInterviewPlan")),
            stage_group_id: f
                .opt_string("stageGroupId")
                .or_else(|| group.opt_string("id")),
            stage_group_name: group.opt_string("name"),
            kind: f.opt_string("type"),
            interview_plan_id: f.opt_string("interviewPlanId"),
            raw: raw.clone(),
        }
    }
}

impl std::fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}
