//! Candidate notes resource

use super::context::{body, EntityStream, ResourceContext};
use crate::error::Result;
use crate::models::Note;
use futures::TryStreamExt;
use serde_json::Value;
use std::fmt;
use tracing::info;

/// Content type of a note body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteType {
    #[default]
    PlainText,
    Html,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Html => "text/html",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NotesResource {
    ctx: ResourceContext,
}

impl NotesResource {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    /// Add a note to a candidate; returns the created note
    pub async fn create(&self, candidate_id: &str, text: &str, note_type: NoteType) -> Result<Note> {
        info!(candidate_id, note_type = %note_type, "Creating candidate note");
        self.ctx
            .fetch_one(
                "candidate.createNote",
                &body([
                    ("candidateId", Value::from(candidate_id)),
                    ("note", Value::from(text)),
                    ("type", Value::from(note_type.as_str())),
                ]),
            )
            .await
    }

    pub fn stream(&self, candidate_id: &str) -> EntityStream<Note> {
        self.ctx.stream(
            "candidate.listNotes",
            body([("candidateId", Value::from(candidate_id))]),
            None,
        )
    }

    pub async fn list(&self, candidate_id: &str) -> Result<Vec<Note>> {
        self.stream(candidate_id).try_collect().await
    }
}
