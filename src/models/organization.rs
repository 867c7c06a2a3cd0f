//! People, org structure, and lookup tables

use super::fields::{Fields, FromRaw, Shape};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Users
// ============================================================================

/// An Ashby user (recruiter, hiring manager, interviewer)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub global_role: Option<String>,
    pub is_enabled: Option<bool>,
    #[serde(skip)]
    pub raw: Value,
}

impl User {
    /// First and last name joined, trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl FromRaw for User {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            first_name: f.string("firstName"),
            last_name: f.string("lastName"),
            email: f.string("email"),
            global_role: f.opt_string("globalRole"),
            is_enabled: f.opt_bool("isEnabled"),
            raw: raw.clone(),
        }
    }
}

/// Role type on a hiring team.
///
/// `hiringTeamRole.list` returns bare strings; other endpoints return
/// objects. Both map to the same shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringTeamRole {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for HiringTeamRole {
    fn from_raw(raw: &Value) -> Self {
        let (id, name) = match Shape::of(Some(raw)) {
            Shape::Scalar(name) => (String::new(), name.to_string()),
            Shape::Object(map) => {
                let f = Fields::from_map(map);
                (f.string("id"), f.first_string(&["name", "title"]))
            }
            Shape::Absent => (String::new(), String::new()),
        };
        Self {
            id,
            name,
            raw: raw.clone(),
        }
    }
}

// ============================================================================
// Organization
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Department {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.string("name"),
            parent_id: f.opt_string("parentId"),
            raw: raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub is_remote: bool,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Location {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.string("name"),
            is_remote: f.flag("isRemote", false),
            raw: raw.clone(),
        }
    }
}

/// Talent pool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub is_archived: bool,
    pub is_confidential: bool,
    pub created_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Project {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.first_string(&["name", "title"]),
            is_archived: f.flag("isArchived", false),
            is_confidential: f.flag("isConfidential", false),
            created_at: f.opt_string("createdAt"),
            raw: raw.clone(),
        }
    }
}

// ============================================================================
// Lookup Tables
// ============================================================================

/// Where a candidate came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Source {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.string("name"),
            kind: f.opt_string("type"),
            raw: raw.clone(),
        }
    }
}

/// Candidate tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub id: String,
    pub title: String,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Tag {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            title: f.string("title"),
            raw: raw.clone(),
        }
    }
}

/// Reason a candidate was archived (rejected)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveReason {
    pub id: String,
    pub name: String,
    pub reason_type: Option<String>,
    pub is_archived: bool,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for ArchiveReason {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.first_string(&["text", "name"]),
            reason_type: f.opt_string("reasonType"),
            is_archived: f.flag("isArchived", false),
            raw: raw.clone(),
        }
    }
}

/// Reason a job was closed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseReason {
    pub id: String,
    pub name: String,
    pub is_archived: bool,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for CloseReason {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.first_string(&["text", "name"]),
            is_archived: f.flag("isArchived", false),
            raw: raw.clone(),
        }
    }
}

/// Definition of a custom field (not a value)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefinition {
    pub id: String,
    pub title: String,
    pub field_type: String,
    pub object_type: Option<String>,
    pub is_required: bool,
    pub is_archived: bool,
    pub selectable_values: Vec<Value>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for CustomFieldDefinition {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            title: f.string("title"),
            field_type: f.string("fieldType"),
            object_type: f.opt_string("objectType"),
            is_required: f.flag("isRequired", false),
            is_archived: f.flag("isArchived", false),
            selectable_values: f.values("selectableValues"),
            raw: raw.clone(),
        }
    }
}
