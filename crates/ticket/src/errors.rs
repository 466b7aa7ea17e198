//! Error types for the ticket domain.
//!
//! [`TicketError`] covers every condition that aborts a ticket creation.
//! All of them are fatal: nothing is retried and no partial result is
//! reported. Configuration failures (missing credential, unknown profile)
//! happen before any domain object exists and are defined by the
//! composition root.
//!
//! An unmatched mention is deliberately absent here. It is a soft condition
//! reported through [`crate::MentionResolution::unresolved`].

use thiserror::Error;

// ---------------------------------------------------------------------------
// Component errors
// ---------------------------------------------------------------------------

/// A network or HTTP-layer failure on one remote call.
///
/// Produced by [`crate::TaskService`] implementations. Never caught or
/// retried inside the domain; it propagates to the invocation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct TransportError {
    /// The remote operation that failed (e.g. `"fetch users"`).
    pub operation: String,
    /// Description of the underlying failure.
    pub message: String,
}

impl TransportError {
    /// Creates a [`TransportError`] for `operation`.
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// A human-readable name could not be resolved to an identifier.
///
/// Always raised before any write call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The workspace listing was empty.
    #[error("no workspaces")]
    NoWorkspaces,

    /// No user's display name matched the assignee name.
    #[error("user not found: {name}")]
    UserNotFound {
        /// The assignee name that was searched for.
        name: String,
    },

    /// No project's display name matched the project name.
    #[error("project not found: {name}")]
    ProjectNotFound {
        /// The project name that was searched for.
        name: String,
    },
}

// ---------------------------------------------------------------------------
// Ticket-level errors
// ---------------------------------------------------------------------------

/// Errors that abort a ticket creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// A name could not be resolved; no task was created.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A remote call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_messages_name_the_missing_entity() {
        assert_eq!(LookupError::NoWorkspaces.to_string(), "no workspaces");
        assert_eq!(
            LookupError::UserNotFound {
                name: "Alice".into()
            }
            .to_string(),
            "user not found: Alice"
        );
        assert_eq!(
            LookupError::ProjectNotFound {
                name: "Proj".into()
            }
            .to_string(),
            "project not found: Proj"
        );
    }

    #[test]
    fn ticket_error_renders_its_source_unchanged() {
        let err: TicketError = TransportError::new("fetch users", "connection refused").into();
        assert_eq!(err.to_string(), "fetch users failed: connection refused");
    }
}
