//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::AshbyClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::resources::{NoteType, SurveysResource};
use crate::types::ListParams;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Client configuration: environment first, command-line flags on top
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(url) = &self.cli.base_url {
            config.base_url = url.clone();
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        config
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = AshbyClient::from_config(self.config())?;

        match &self.cli.command {
            Commands::Jobs { status } => {
                let statuses: Vec<&str> = status.iter().map(String::as_str).collect();
                self.output_list(&client.jobs.list(&statuses).await?)
            }
            Commands::Job { job_id } => self.output(&client.jobs.get(job_id).await?),
            Commands::Applications { job_id } => {
                self.output_list(&client.applications.list(job_id.as_deref()).await?)
            }
            Commands::Application {
                application_id,
                with_candidate,
                forms,
            } => {
                let application = if *with_candidate {
                    client.get_application_with_candidate(application_id).await?
                } else {
                    client.applications.get(application_id, *forms).await?
                };
                self.output(&application)
            }
            Commands::Candidate { candidate_id } => {
                self.output(&client.candidates.get(candidate_id).await?)
            }
            Commands::Search { email, name } => self.output_list(
                &client
                    .candidates
                    .search(email.as_deref(), name.as_deref())
                    .await?,
            ),
            Commands::Funnel { job_id } => self.output_list(&client.get_job_funnel(job_id).await?),
            Commands::Stage { application_id } => {
                self.output(&client.get_application_stage(application_id).await?)
            }
            Commands::MoveStage {
                application_id,
                interview_stage_id,
            } => self.output(
                &client
                    .move_application_to_stage(application_id, interview_stage_id)
                    .await?,
            ),
            Commands::Resume {
                candidate_id,
                output,
            } => self.resume(&client, candidate_id, output.clone()).await,
            Commands::Description { job_id } => {
                let description = client.get_job_description(job_id).await?;
                self.output(&json!({"jobId": job_id, "description": description}))
            }
            Commands::Answers {
                application_id,
                candidate_id,
                survey_type,
            } => {
                let parsed = match (application_id, candidate_id) {
                    (Some(application_id), _) => {
                        client.get_application_answers(application_id).await?
                    }
                    (None, Some(candidate_id)) => client
                        .surveys
                        .get_for_candidate(candidate_id, survey_type)
                        .await?
                        .iter()
                        .map(SurveysResource::parse_submission)
                        .collect(),
                    (None, None) => {
                        return Err(Error::validation(
                            "answers needs --application-id or --candidate-id",
                        ))
                    }
                };
                self.output_list(&parsed)
            }
            Commands::Feedback { application_id } => {
                self.output_list(&client.feedback.list_for_application(application_id).await?)
            }
            Commands::Notes {
                candidate_id,
                add,
                html,
            } => match add {
                Some(text) => {
                    let note_type = if *html { NoteType::Html } else { NoteType::PlainText };
                    self.output(&client.create_candidate_note(candidate_id, text, note_type).await?)
                }
                None => self.output_list(&client.notes.list(candidate_id).await?),
            },
            Commands::Endpoints => {
                let rows: Vec<Value> = client
                    .endpoints()
                    .iter()
                    .map(|d| {
                        json!({
                            "name": d.name,
                            "supportsGet": d.supports_get,
                            "idParam": d.id_param(),
                        })
                    })
                    .collect();
                self.output_list(&rows)
            }
            Commands::List { endpoint, id } => match id {
                Some(id) => self.output(&client.generic.get_json(endpoint, id).await?),
                None => self.output_list(
                    &client
                        .generic
                        .list_json(endpoint, &ListParams::new())
                        .await?,
                ),
            },
        }
    }

    async fn resume(
        &self,
        client: &AshbyClient,
        candidate_id: &str,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let candidate = client.candidates.get(candidate_id).await?;
        let file = client
            .download_resume(&candidate)
            .await?
            .ok_or_else(|| Error::not_found(format!("Candidate {candidate_id} has no resume")))?;

        let path = output.unwrap_or_else(|| PathBuf::from(&file.filename));
        fs::write(&path, &file.content)?;
        info!(path = %path.display(), bytes = file.content.len(), "Saved resume");

        self.output(&json!({
            "candidateId": candidate_id,
            "filename": file.filename,
            "path": path.display().to_string(),
            "bytes": file.content.len(),
        }))
    }

    /// Print one value
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }

    /// Print a sequence: one line per item, or one indented array
    fn output_list<T: Serialize>(&self, items: &[T]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => items.iter().try_for_each(|item| self.output(item)),
            OutputFormat::Pretty => self.output(&items),
        }
    }
}
