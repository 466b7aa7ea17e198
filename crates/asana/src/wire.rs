//! Request and response shapes of the Asana REST API.
//!
//! Asana wraps every payload in a `data` member and reports failures in an
//! `errors` array. Only the members this tool reads or writes are modelled.

use serde::{Deserialize, Serialize};

use ticket::{
    CorrelationToken, Project, ProjectId, TaskDraft, User, UserId, Workspace, WorkspaceId,
};

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Envelope of a list endpoint.
///
/// An error-shaped body has no `data`; it then decodes as an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// One entry of an `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// The compact form every list endpoint returns.
///
/// A record without a `gid` decodes with an empty one and is dropped by the
/// `into_*` conversions.
#[derive(Debug, Deserialize)]
pub(crate) struct CompactRecord {
    #[serde(default)]
    pub gid: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl CompactRecord {
    fn into_parts(self) -> (String, String) {
        (self.gid, self.name.unwrap_or_default())
    }

    pub fn into_workspace(self) -> Option<Workspace> {
        let (gid, name) = self.into_parts();
        WorkspaceId::new(gid).map(|id| Workspace { name, id })
    }

    pub fn into_user(self) -> Option<User> {
        let (gid, name) = self.into_parts();
        UserId::new(gid).map(|id| User { name, id })
    }

    pub fn into_project(self) -> Option<Project> {
        let (gid, name) = self.into_parts();
        ProjectId::new(gid).map(|id| Project { name, id })
    }
}

// ---------------------------------------------------------------------------
// Task creation
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskEnvelope<'a> {
    pub data: CreateTaskBody<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct External {
    pub gid: String,
}

/// Body of `POST /tasks`.
///
/// The status members are constant: the task starts upcoming, incomplete,
/// pending approval and liked by its creator.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskBody<'a> {
    pub external: External,
    pub name: &'a str,
    pub resource_subtype: &'static str,
    pub approval_status: &'static str,
    pub assignee_status: &'static str,
    pub completed: bool,
    pub html_notes: &'a str,
    pub liked: bool,
    pub assignee: &'a str,
    pub projects: [&'a str; 1],
    pub workspace: &'a str,
}

impl<'a> CreateTaskEnvelope<'a> {
    pub fn new(draft: &'a TaskDraft, correlation: CorrelationToken) -> Self {
        Self {
            data: CreateTaskBody {
                external: External {
                    gid: correlation.to_string(),
                },
                name: &draft.subject,
                resource_subtype: "default_task",
                approval_status: "pending",
                assignee_status: "upcoming",
                completed: false,
                html_notes: &draft.notes_html,
                liked: true,
                assignee: draft.assignee.as_str(),
                projects: [draft.project.as_str()],
                workspace: draft.workspace.as_str(),
            },
        }
    }
}
