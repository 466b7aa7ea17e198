//! Remote entities and the task-creation request/response values.
//!
//! Entities are request-scoped: they are fetched during one invocation,
//! never mutated locally, and discarded at process exit.

use serde::{Deserialize, Serialize};

use crate::{CorrelationToken, ProjectId, UserId, WorkspaceId};

// ---------------------------------------------------------------------------
// Named entities
// ---------------------------------------------------------------------------

/// An entity that can be looked up by its human-readable display name.
pub trait Named {
    /// Returns the display name as reported by the service.
    fn name(&self) -> &str;
}

/// Returns the first entity whose display name equals `name` exactly.
///
/// Matching is case-sensitive and performs no trimming.
pub fn find_by_name<'a, T: Named>(entities: &'a [T], name: &str) -> Option<&'a T> {
    entities.iter().find(|entity| entity.name() == name)
}

/// A workspace visible to the authenticated user.
///
/// The service may omit the name in compact listings; it is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Display name.
    pub name: String,
    /// Service-assigned identifier.
    pub id: WorkspaceId,
}

/// A user that can be assigned tasks or mentioned in notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, the value matched by assignee and mention lookups.
    pub name: String,
    /// Service-assigned identifier.
    pub id: UserId,
}

/// A project tasks can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name.
    pub name: String,
    /// Service-assigned identifier.
    pub id: ProjectId,
}

macro_rules! impl_named {
    ($($ty:ty),+) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

impl_named!(Workspace, User, Project);

// ---------------------------------------------------------------------------
// Task creation
// ---------------------------------------------------------------------------

/// Everything needed to create one task, with every name already resolved
/// to its identifier.
///
/// The correlation token is not part of the draft; the [`crate::TaskService`]
/// implementation generates a fresh one for each creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Task name.
    pub subject: String,
    /// Notes wrapped in `<body>…</body>`, mentions already rewritten.
    pub notes_html: String,
    /// Identifier of the assignee.
    pub assignee: UserId,
    /// Identifier of the single project the task is added to.
    pub project: ProjectId,
    /// Identifier of the workspace the task is created in.
    pub workspace: WorkspaceId,
}

/// The outcome of a creation call as observed on the wire.
///
/// The body is passed through verbatim whatever the status; callers never
/// branch on the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreated {
    /// HTTP status code returned by the service.
    pub status: u16,
    /// Raw response body.
    pub body: String,
    /// The token that was sent with the request.
    pub correlation: CorrelationToken,
}

// ---------------------------------------------------------------------------
// Mentions
// ---------------------------------------------------------------------------

/// Result of rewriting `@[Name]` placeholders in a notes body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MentionResolution {
    /// The rewritten text.
    pub text: String,
    /// Names, one per placeholder occurrence, that matched no known user.
    /// Their placeholders are still present verbatim in [`Self::text`].
    pub unresolved: Vec<String>,
}

impl MentionResolution {
    /// Returns `true` if every placeholder was matched.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}
