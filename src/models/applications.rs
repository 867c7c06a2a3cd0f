//! Applications and the records attached to them

use super::candidates::Candidate;
use super::fields::{Fields, FromRaw, Shape};
use super::jobs::InterviewStage;
use super::organization::{Source, User};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Application
// ============================================================================

/// A candidate's application to one job
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub status: String,
    pub candidate_id: String,
    pub candidate_name: String,
    pub job_id: String,
    pub is_archived: bool,
    pub archive_reason: Option<String>,
    pub current_stage: Option<InterviewStage>,
    pub source: Option<Source>,
    pub form_submission: Option<ApplicationFormSubmission>,
    /// Expanded `applicationFormSubmissions`, kept raw for form parsing
    pub form_submissions: Vec<Value>,
    pub credited_to: Option<User>,
    pub hired_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    /// Filled in by composite lookups; never set by mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
    #[serde(skip)]
    pub raw: Value,
}

impl Application {
    pub fn stage_name(&self) -> Option<&str> {
        self.current_stage.as_ref().map(|s| s.name.as_str())
    }

    /// Whether any form submission data came back with the application
    pub fn has_form_data(&self) -> bool {
        !self.form_submissions.is_empty() || self.form_submission.is_some()
    }
}

impl FromRaw for Application {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        let candidate = f.object("candidate");
        let archive_reason = match Shape::of(f.value("archiveReason")) {
            Shape::Scalar(reason) => Some(reason.to_string()),
            Shape::Object(map) => Fields::from_map(map).opt_string("name"),
            Shape::Absent => None,
        };
        let job_id = f
            .opt_string("jobId")
            .unwrap_or_else(|| f.object("job").string("id"));

        Self {
            id: f.string("id"),
            status: f.string("status"),
            candidate_id: candidate.string("id"),
            candidate_name: candidate.string("name"),
            job_id,
            is_archived: f.flag("isArchived", false),
            archive_reason,
            current_stage: f.nested("currentInterviewStage"),
            source: f.nested("source"),
            form_submission: f.nested("applicationFormSubmission"),
            form_submissions: f.values("applicationFormSubmissions"),
            credited_to: f.nested("creditedTo"),
            hired_at: f.opt_string("hiredAt"),
            created_at: f.opt_string("createdAt"),
            updated_at: f.opt_string("updatedAt"),
            candidate: None,
            raw: raw.clone(),
        }
    }
}

// ============================================================================
// Application Forms
// ============================================================================

/// Answers submitted with an application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationFormSubmission {
    pub id: String,
    pub fields: Vec<FormFieldSubmission>,
    #[serde(skip)]
    pub raw: Value,
}

impl ApplicationFormSubmission {
    /// Value of the field with this title, compared case-insensitively
    pub fn field_value(&self, title: &str) -> Option<&Value> {
        let wanted = title.to_lowercase();
        self.fields
            .iter()
            .find(|field| field.field_title.to_lowercase() == wanted)
            .and_then(|field| field.value.as_ref())
    }
}

impl FromRaw for ApplicationFormSubmission {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            fields: f.list("formSubmissionValue"),
            raw: raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldSubmission {
    pub field_id: String,
    pub field_title: String,
    pub field_type: String,
    pub value: Option<Value>,
}

impl FromRaw for FormFieldSubmission {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        let field = f.object("field");
        Self {
            field_id: field.string("id"),
            field_title: field.string("title"),
            field_type: field.string("type"),
            value: f.value("value").cloned(),
        }
    }
}

// ============================================================================
// Offers and Interviews
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub application_id: String,
    pub status: String,
    pub start_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Offer {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            application_id: f.string("applicationId"),
            status: f.string("status"),
            start_date: f.opt_string("startDate"),
            created_at: f.opt_string("createdAt"),
            updated_at: f.opt_string("updatedAt"),
            raw: raw.clone(),
        }
    }
}

/// A single scheduled interview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: String,
    pub application_id: Option<String>,
    pub status: Option<String>,
    pub interview_stage_id: Option<String>,
    pub scheduled_start_time: Option<String>,
    pub scheduled_end_time: Option<String>,
    pub created_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Interview {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            application_id: f.opt_string("applicationId"),
            status: f.opt_string("status"),
            interview_stage_id: f.opt_string("interviewStageId"),
            scheduled_start_time: f.opt_string("scheduledStartTime"),
            scheduled_end_time: f.opt_string("scheduledEndTime"),
            created_at: f.opt_string("createdAt"),
            raw: raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSchedule {
    pub id: String,
    pub application_id: Option<String>,
    pub status: Option<String>,
    pub scheduled_start_time: Option<String>,
    pub scheduled_end_time: Option<String>,
    pub created_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for InterviewSchedule {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            application_id: f.opt_string("applicationId"),
            status: f.opt_string("status"),
            scheduled_start_time: f.opt_string("scheduledStartTime"),
            scheduled_end_time: f.opt_string("scheduledEndTime"),
            created_at: f.opt_string("createdAt"),
            raw: raw.clone(),
        }
    }
}

// ============================================================================
// Feedback
// ============================================================================

const RECOMMENDATION_TITLES: [&str; 2] = ["overall recommendation", "recommendation"];

/// Interview feedback (scorecard)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub application_id: String,
    pub interview_id: Option<String>,
    pub submitted_at: Option<String>,
    pub submitter: Option<User>,
    pub form_definition: Option<Value>,
    pub submitted_values: Vec<Value>,
    pub overall_recommendation: Option<Value>,
    #[serde(skip)]
    pub raw: Value,
}

impl Feedback {
    /// Submitted value whose field title matches, case-insensitively
    pub fn score(&self, title: &str) -> Option<&Value> {
        let wanted = title.to_lowercase();
        find_submitted(&self.submitted_values, |t| t == wanted)
    }
}

fn find_submitted(values: &[Value], mut matches: impl FnMut(&str) -> bool) -> Option<&Value> {
    values.iter().find_map(|entry| {
        let f = Fields::of(entry);
        let title = f.object("field").string("title").to_lowercase();
        if matches(&title) {
            f.value("value")
        } else {
            None
        }
    })
}

impl FromRaw for Feedback {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        let submitted_values = f.values("submittedValues");
        let overall_recommendation =
            find_submitted(&submitted_values, |t| RECOMMENDATION_TITLES.contains(&t)).cloned();

        Self {
            id: f.string("id"),
            application_id: f.string("applicationId"),
            interview_id: f.opt_string("interviewId"),
            submitted_at: f.opt_string("submittedAt"),
            submitter: f.nested("submitter"),
            form_definition: f.value("formDefinition").cloned(),
            submitted_values,
            overall_recommendation,
            raw: raw.clone(),
        }
    }
}
