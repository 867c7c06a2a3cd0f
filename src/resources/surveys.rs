//! Survey and questionnaire submissions
//!
//! Submissions come back raw: their shape depends on the form. The same
//! parser also flattens the `applicationFormSubmissions` expansion of an
//! application.

use super::context::{body, ResourceContext};
use crate::error::Result;
use crate::pagination::ItemStream;
use futures::{future, TryStreamExt};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Survey type listed when the caller does not pick one
pub const DEFAULT_SURVEY_TYPE: &str = "Questionnaire";

const SYSTEM_FIELD_PREFIX: &str = "_systemfield_";

/// System fields carrying candidate identity data; never answers
const IDENTITY_FIELDS: [&str; 5] = [
    "_systemfield_resume",
    "_systemfield_pre_parsed_resume",
    "_systemfield_name",
    "_systemfield_email",
    "_systemfield_phone",
];

/// A submission flattened to title -> answer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedSubmission {
    pub submitted_at: Option<String>,
    pub candidate_id: Option<String>,
    pub application_id: Option<String>,
    pub survey_type: Option<String>,
    pub form_id: Option<String>,
    /// Answers keyed by human-readable field title
    pub answers: BTreeMap<String, Value>,
}

#[derive(Debug, Clone)]
pub struct SurveysResource {
    ctx: ResourceContext,
}

impl SurveysResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Lazily page through raw submissions of one survey type
    pub fn stream(&self, survey_type: &str) -> ItemStream {
        self.ctx.stream_raw(
            "surveySubmission.list",
            body([("surveyType", Value::from(survey_type))]),
            None,
        )
    }

    pub async fn list(&self, survey_type: &str) -> Result<Vec<Value>> {
        self.stream(survey_type).try_collect().await
    }

    /// Submissions by one candidate, filtered client-side
    pub async fn get_for_candidate(&self, candidate_id: &str, survey_type: &str) -> Result<Vec<Value>> {
        let candidate_id = candidate_id.to_string();
        self.stream(survey_type)
            .try_filter(move |s| {
                future::ready(s.get("candidateId").and_then(Value::as_str) == Some(candidate_id.as_str()))
            })
            .try_collect()
            .await
    }

    /// Flatten a raw submission.
    ///
    /// Titles come from the embedded form definition (by field id or path);
    /// unknown keys keep the raw key as title. Identity system fields are
    /// dropped, as are other system fields the form does not define.
    pub fn parse_submission(submission: &Value) -> ParsedSubmission {
        let titles = field_titles(submission);
        let text = |key: &str| submission.get(key).and_then(Value::as_str).map(str::to_string);

        let mut answers = BTreeMap::new();
        if let Some(submitted) = submission.get("submittedValues").and_then(Value::as_object) {
            for (key, value) in submitted {
                if IDENTITY_FIELDS.contains(&key.as_str()) {
                    continue;
                }
                let title = titles.get(key.as_str()).copied();
                if key.starts_with(SYSTEM_FIELD_PREFIX) && title.is_none() {
                    continue;
                }
                answers.insert(title.unwrap_or(key).to_string(), normalize_answer(value));
            }
        }

        ParsedSubmission {
            submitted_at: text("submittedAt"),
            candidate_id: text("candidateId"),
            application_id: text("applicationId"),
            survey_type: text("surveyType"),
            form_id: text("id"),
            answers,
        }
    }
}

/// Field id and path -> title, from `formDefinition.sections[].fields[].field`
fn field_titles(submission: &Value) -> HashMap<&str, &str> {
    let sections = submission
        .pointer("/formDefinition/sections")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let mut titles = HashMap::new();
    for field in sections
        .iter()
        .filter_map(|s| s.get("fields").and_then(Value::as_array))
        .flatten()
        .filter_map(|f| f.get("field").and_then(Value::as_object))
    {
        let Some(title) = field.get("title").and_then(Value::as_str) else {
            continue;
        };
        for key in ["id", "path"] {
            if let Some(k) = field.get(key).and_then(Value::as_str).filter(|k| !k.is_empty()) {
                titles.insert(k, title);
            }
        }
    }
    titles
}

fn normalize_answer(value: &Value) -> Value {
    match value {
        Value::Object(map) => pick_label(map).unwrap_or(value).clone(),
        Value::Bool(yes) => Value::from(if *yes { "Yes" } else { "No" }),
        Value::Array(items) => Value::from(
            items
                .iter()
                .map(list_entry_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => other.clone(),
    }
}

/// `text`, else `name`, when present
fn pick_label(map: &Map<String, Value>) -> Option<&Value> {
    map.get("text").or_else(|| map.get("name"))
}

fn list_entry_text(item: &Value) -> String {
    let item = match item {
        Value::Object(map) => map.get("name").unwrap_or(item),
        other => other,
    };
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
