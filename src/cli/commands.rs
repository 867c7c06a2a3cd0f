//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line access to the Ashby API
#[derive(Parser, Debug)]
#[command(name = "ashby")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (defaults to ASHBY_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// API base URL (defaults to ASHBY_BASE_URL, then the production API)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Results per page for list calls
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List jobs
    Jobs {
        /// Status filter (repeatable): Open, Closed, Draft, Archived
        #[arg(long)]
        status: Vec<String>,
    },

    /// Show one job
    Job { job_id: String },

    /// List applications
    Applications {
        /// Only applications for this job
        #[arg(long)]
        job_id: Option<String>,
    },

    /// Show one application
    Application {
        application_id: String,

        /// Include the full candidate record
        #[arg(long)]
        with_candidate: bool,

        /// Expand form submissions
        #[arg(long)]
        forms: bool,
    },

    /// Show one candidate
    Candidate { candidate_id: String },

    /// Search candidates by email and/or name
    Search {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Interview stages of a job, in order
    Funnel { job_id: String },

    /// Current stage of an application
    Stage { application_id: String },

    /// Move an application to another stage
    MoveStage {
        application_id: String,
        interview_stage_id: String,
    },

    /// Download a candidate's resume
    Resume {
        candidate_id: String,

        /// Output file (defaults to the server-provided filename)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Job posting description of a job
    Description { job_id: String },

    /// Parsed answers: application forms, or a candidate's surveys
    Answers {
        /// Application whose form submissions to parse
        #[arg(long, conflicts_with = "candidate_id", required_unless_present = "candidate_id")]
        application_id: Option<String>,

        /// Candidate whose survey submissions to parse
        #[arg(long)]
        candidate_id: Option<String>,

        /// Survey type for --candidate-id
        #[arg(long, default_value = "Questionnaire")]
        survey_type: String,
    },

    /// Interview feedback for an application
    Feedback { application_id: String },

    /// List a candidate's notes, or add one
    Notes {
        candidate_id: String,

        /// Add a note with this text
        #[arg(long)]
        add: Option<String>,

        /// Treat the note text as HTML
        #[arg(long, requires = "add")]
        html: bool,
    },

    /// Show the generic endpoint table
    Endpoints,

    /// List (or get one from) a generic endpoint, e.g. `list department`
    List {
        endpoint: String,

        /// Fetch a single entity instead of listing
        #[arg(long)]
        id: Option<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Indented JSON
    Pretty,
}
