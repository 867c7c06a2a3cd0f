//! Candidates and what hangs off them

use super::fields::{Fields, FromRaw, Shape};
use super::jobs::CustomField;
use super::organization::{Tag, User};
use serde::Serialize;
use serde_json::Value;

/// A person in the talent pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub primary_email: Option<EmailAddress>,
    pub primary_phone: Option<PhoneNumber>,
    pub resume_file: Option<FileHandle>,
    pub links: Vec<Link>,
    pub tags: Vec<Tag>,
    pub custom_fields: Vec<CustomField>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub raw: Value,
}

impl Candidate {
    pub fn email(&self) -> Option<&str> {
        self.primary_email.as_ref().map(|e| e.value.as_str())
    }

    pub fn phone(&self) -> Option<&str> {
        self.primary_phone.as_ref().map(|p| p.value.as_str())
    }

    /// Handle of the candidate's resume, usable with the file endpoints
    pub fn resume_handle(&self) -> Option<&str> {
        self.resume_file
            .as_ref()
            .map(|file| file.handle.as_str())
            .filter(|h| !h.is_empty())
    }
}

impl FromRaw for Candidate {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            name: f.string("name"),
            primary_email: f.nested("primaryEmailAddress"),
            primary_phone: f.nested("primaryPhoneNumber"),
            resume_file: FileHandle::from_shape(Shape::of(f.value("resumeFileHandle"))),
            links: f.list("links"),
            tags: f.list("tags"),
            custom_fields: f.list("customFields"),
            created_at: f.opt_string("createdAt"),
            updated_at: f.opt_string("updatedAt"),
            raw: raw.clone(),
        }
    }
}

// ============================================================================
// Contact Details
// ============================================================================

/// Email address or phone number with its label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_primary: bool,
}

pub type EmailAddress = ContactPoint;
pub type PhoneNumber = ContactPoint;

impl FromRaw for ContactPoint {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            value: f.string("value"),
            kind: f.string("type"),
            is_primary: f.flag("isPrimary", false),
        }
    }
}

/// LinkedIn, portfolio, and similar profile links
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FromRaw for Link {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            url: f.string("url"),
            kind: f.string("type"),
        }
    }
}

// ============================================================================
// Files
// ============================================================================

/// Reference to a stored file (resume, attachment)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileHandle {
    pub id: String,
    pub name: String,
    pub handle: String,
}

impl FileHandle {
    /// Normalize a handle sent either as a bare string or as a file object
    pub fn from_shape(shape: Shape<'_>) -> Option<Self> {
        match shape {
            Shape::Scalar(handle) => Some(Self {
                id: String::new(),
                name: String::new(),
                handle: handle.to_string(),
            }),
            Shape::Object(map) => {
                let f = Fields::from_map(map);
                Some(Self {
                    id: f.string("id"),
                    name: f.string("name"),
                    handle: f.string("handle"),
                })
            }
            Shape::Absent => None,
        }
    }
}

impl FromRaw for FileHandle {
    fn from_raw(raw: &Value) -> Self {
        Self::from_shape(Shape::of(Some(raw))).unwrap_or_default()
    }

    fn from_nested(raw: Option<&Value>) -> Option<Self> {
        Self::from_shape(Shape::of(raw))
    }
}

// ============================================================================
// Notes
// ============================================================================

/// Free-form note on a candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content: String,
    /// MIME type of `content`
    pub content_type: String,
    pub created_at: Option<String>,
    pub author: Option<User>,
    #[serde(skip)]
    pub raw: Value,
}

impl FromRaw for Note {
    fn from_raw(raw: &Value) -> Self {
        let f = Fields::of(raw);
        Self {
            id: f.string("id"),
            content: f.string("content"),
            content_type: f
                .opt_string("type")
                .unwrap_or_else(|| "text/plain".to_string()),
            created_at: f.opt_string("createdAt"),
            author: f.nested("author"),
            raw: raw.clone(),
        }
    }
}
