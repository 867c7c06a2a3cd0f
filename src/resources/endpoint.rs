//! Endpoint descriptors and the generic endpoint table
//!
//! Each row names a remote collection and whether it has an `.info` call.
//! The same rows generate the [`GenericResources`] fields, so adding a
//! collection is one line here.

use super::context::ResourceContext;
use super::generic::GenericResource;
use crate::error::{Error, Result};
use crate::models::{
    ArchiveReason, CloseReason, CustomFieldDefinition, Department, HiringTeamRole, Interview,
    InterviewSchedule, Location, Offer, Project, Source, Tag, User,
};
use crate::types::ListParams;
use serde::Serialize;
use serde_json::Value;

/// Declarative description of one remote collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Endpoint prefix, e.g. `department` for `department.list`
    pub name: &'static str,
    /// Whether `<name>.info` exists
    pub supports_get: bool,
    id_param: Option<&'static str>,
}

impl EndpointDescriptor {
    /// Collection with `.list` only
    pub const fn list_only(name: &'static str) -> Self {
        Self {
            name,
            supports_get: false,
            id_param: None,
        }
    }

    /// Collection with `.list` and `.info`
    pub const fn with_get(name: &'static str) -> Self {
        Self {
            name,
            supports_get: true,
            id_param: None,
        }
    }

    /// Override the id parameter of `.info` calls
    pub const fn id_param_named(mut self, param: &'static str) -> Self {
        self.id_param = Some(param);
        self
    }

    /// Id parameter of `.info` calls; `<name>Id` unless overridden
    pub fn id_param(&self) -> String {
        self.id_param
            .map_or_else(|| format!("{}Id", self.name), str::to_string)
    }

    pub fn list_endpoint(&self) -> String {
        format!("{}.list", self.name)
    }

    pub fn info_endpoint(&self) -> String {
        format!("{}.info", self.name)
    }

    /// Look up a row of the generic endpoint table
    pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
        ENDPOINTS.iter().find(|d| d.name == name)
    }
}

fn to_json<T: Serialize>(items: Vec<T>) -> Result<Vec<Value>> {
    items
        .into_iter()
        .map(|item| serde_json::to_value(item).map_err(Error::from))
        .collect()
}

/// Declares the endpoint table together with one typed field per row
macro_rules! generic_endpoints {
    ($( $(#[$doc:meta])* $field:ident: $model:ty = $descriptor:expr; )+) => {
        /// Every collection served by [`GenericResource`]
        pub const ENDPOINTS: &[EndpointDescriptor] = &[$($descriptor),+];

        /// One generic resource per endpoint table row
        #[derive(Debug, Clone)]
        pub struct GenericResources {
            $( $(#[$doc])* pub $field: GenericResource<$model>, )+
        }

        impl GenericResources {
            pub(crate) fn new(ctx: &ResourceContext) -> Self {
                Self {
                    $( $field: GenericResource::new($descriptor, ctx.clone()), )+
                }
            }

            /// List a collection by endpoint name, entities rendered as JSON
            pub async fn list_json(&self, endpoint: &str, params: &ListParams) -> Result<Vec<Value>> {
                match endpoint {
                    $( name if name == $descriptor.name => to_json(self.$field.list(params).await?), )+
                    other => Err(Error::validation(format!("Unknown endpoint: {other}"))),
                }
            }

            /// Fetch one entity by endpoint name, rendered as JSON
            pub async fn get_json(&self, endpoint: &str, id: &str) -> Result<Value> {
                match endpoint {
                    $( name if name == $descriptor.name => {
                        Ok(serde_json::to_value(self.$field.get(id).await?)?)
                    } )+
                    other => Err(Error::validation(format!("Unknown endpoint: {other}"))),
                }
            }
        }
    };
}

generic_endpoints! {
    // Hiring process metadata
    /// Candidate sources
    sources: Source = EndpointDescriptor::list_only("source");
    archive_reasons: ArchiveReason = EndpointDescriptor::list_only("archiveReason");
    close_reasons: CloseReason = EndpointDescriptor::list_only("closeReason");
    candidate_tags: Tag = EndpointDescriptor::list_only("candidateTag");
    /// Returned as bare role names
    hiring_team_roles: HiringTeamRole = EndpointDescriptor::list_only("hiringTeamRole");

    // Organization
    departments: Department = EndpointDescriptor::with_get("department");
    locations: Location = EndpointDescriptor::with_get("location");
    users: User = EndpointDescriptor::with_get("user");
    /// Custom field definitions
    custom_fields: CustomFieldDefinition = EndpointDescriptor::with_get("customField");

    /// Talent pools
    projects: Project = EndpointDescriptor::with_get("project");
    offers: Offer = EndpointDescriptor::with_get("offer");
    interviews: Interview = EndpointDescriptor::with_get("interview");
    interview_schedules: InterviewSchedule = EndpointDescriptor::with_get("interviewSchedule");
}
