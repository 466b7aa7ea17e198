//! asana_xt ticket orchestrator.
//!
//! [`TicketOrchestrator`] turns a [`TicketRequest`] (human-readable names plus
//! task content) into exactly one remote task. It drives the
//! [`ticket::TaskService`] port through a fixed, linear sequence:
//!
//! 1. **ResolveWorkspace**: fetch workspaces; the first one returned wins.
//! 2. **ResolveAssignee**: fetch users; exact name match on the assignee.
//! 3. **ResolveProject**: fetch projects; exact name match on the project.
//! 4. **ResolveMentions**: fetch users again and rewrite `@[Name]`
//!    placeholders in the notes.
//! 5. **CreateTask**: issue the single write call and hand back the raw
//!    response.
//!
//! Any failure aborts the sequence. Lookup failures always happen before the
//! write, so a failed run never creates a task. Nothing is retried.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Sequences calls between business logic in the
//! [`ticket`] crate and the `TaskService` port. Contains no HTTP details.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use ticket::{
    find_by_name, resolve_mentions, LookupError, TaskCreated, TaskDraft, TaskService, TicketError,
};

/// The human-readable inputs for one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRequest {
    /// Task name.
    pub subject: String,
    /// Notes already wrapped in `<body>…</body>`, placeholders unresolved.
    pub notes_html: String,
    /// Display name of the target project.
    pub project_name: String,
    /// Display name of the assignee.
    pub assignee_name: String,
}

/// Drives name resolution and task creation against a [`TaskService`].
#[derive(Debug)]
pub struct TicketOrchestrator<S> {
    service: Arc<S>,
}

impl<S: TaskService> TicketOrchestrator<S> {
    /// Creates an orchestrator over `service`.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Resolves every name in `request` and creates the task.
    ///
    /// # Errors
    ///
    /// - [`TicketError::Lookup`] when the workspace list is empty or the
    ///   assignee or project name matches nothing. No task is created.
    /// - [`TicketError::Transport`] when any remote call fails.
    #[instrument(
        skip(self, request),
        fields(project = %request.project_name, assignee = %request.assignee_name)
    )]
    pub async fn create_ticket(&self, request: &TicketRequest) -> Result<TaskCreated, TicketError> {
        let workspaces = self.service.fetch_workspaces().await?;
        let workspace = workspaces
            .into_iter()
            .next()
            .ok_or(LookupError::NoWorkspaces)?;
        debug!(workspace_id = %workspace.id, "resolved workspace");

        let users = self.service.fetch_users().await?;
        let assignee = find_by_name(&users, &request.assignee_name).ok_or_else(|| {
            LookupError::UserNotFound {
                name: request.assignee_name.clone(),
            }
        })?;
        debug!(user_id = %assignee.id, "resolved assignee");

        let projects = self.service.fetch_projects().await?;
        let project = find_by_name(&projects, &request.project_name).ok_or_else(|| {
            LookupError::ProjectNotFound {
                name: request.project_name.clone(),
            }
        })?;
        debug!(project_id = %project.id, "resolved project");

        let directory = self.service.fetch_users().await?;
        let mentions = resolve_mentions(&request.notes_html, &directory);
        if !mentions.is_complete() {
            warn!(
                unresolved = mentions.unresolved.len(),
                "some mentions were left unresolved"
            );
        }

        let draft = TaskDraft {
            subject: request.subject.clone(),
            notes_html: mentions.text,
            assignee: assignee.id.clone(),
            project: project.id.clone(),
            workspace: workspace.id,
        };
        let created = self.service.create_task(&draft).await?;
        info!(
            status = created.status,
            correlation = %created.correlation,
            "task creation call completed"
        );

        Ok(created)
    }
}
