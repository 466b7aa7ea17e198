//! Port trait for the remote project-management service.
//!
//! The domain only ever talks to the service through [`TaskService`].
//! Infrastructure crates (e.g. `asana`) supply the HTTP implementation;
//! tests supply in-memory doubles.

use async_trait::async_trait;

use crate::{Project, TaskCreated, TaskDraft, TransportError, User, Workspace};

/// The four remote operations a ticket creation needs.
///
/// Every call is a fresh round trip. Implementations must not cache across
/// calls and must not retry: [`TaskService::create_task`] generates a new
/// correlation token per call, so a transparent retry could create a
/// duplicate task.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Lists workspaces in the order the service returns them.
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, TransportError>;

    /// Lists users in the order the service returns them.
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError>;

    /// Lists projects in the order the service returns them.
    async fn fetch_projects(&self) -> Result<Vec<Project>, TransportError>;

    /// Creates exactly one task.
    ///
    /// Returns the raw response whatever its HTTP status. Only failures to
    /// obtain a response at all are errors.
    async fn create_task(&self, draft: &TaskDraft) -> Result<TaskCreated, TransportError>;
}
