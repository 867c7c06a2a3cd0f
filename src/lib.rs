// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Ashby API client
//!
//! A typed, async client for the Ashby applicant tracking system.
//!
//! ## Features
//!
//! - **One request pipeline**: every call is an authenticated
//!   `POST <base>/<endpoint>` whose response is classified into a result or
//!   a typed [`Error`]
//! - **Lazy cursor pagination**: listings are streams that fetch the next
//!   page only when the previous one is consumed
//! - **Table-driven resources**: list/get collections come from one endpoint
//!   table; endpoints with their own protocol get hand-written resources
//! - **Defensive mapping**: entities never fail to map and keep their raw
//!   JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ashby_client::{AshbyClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = AshbyClient::new(None)?; // ASHBY_API_KEY
//!
//!     for job in client.jobs.list(&["Open"]).await? {
//!         let funnel = client.get_job_funnel(&job.id).await?;
//!         println!("{}: {} stages", job.title, funnel.len());
//!     }
//!
//!     let departments = client.generic.departments.list(&Default::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        AshbyClient                           │
//! │      specialized resources  +  generic endpoint table        │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────┬───────────────────────┐
//! │   models     │   pagination         │   http                │
//! ├──────────────┼──────────────────────┼───────────────────────┤
//! │ FromRaw      │ CursorPaginator      │ RequestExecutor       │
//! │ Shape        │ PageEnvelope         │ Transport (reqwest)   │
//! └──────────────┴──────────────────────┴───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credential handling
pub mod auth;

/// Client configuration
pub mod config;

/// Transport and request executor
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Typed entities
pub mod models;

/// Resource interfaces
pub mod resources;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::AshbyClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

pub use resources::{EndpointDescriptor, NoteType, PostingSelector, TitleThenRecency};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
