//! Newtype domain identifiers.
//!
//! Every remote entity carries an opaque identifier string assigned by the
//! project-management service (Asana calls it a `gid`). Each kind is its own
//! newtype so a [`UserId`] can never be passed where a [`ProjectId`] is
//! expected, even though both are strings under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: service-assigned
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies a workspace, the top-level container every task belongs to.
    WorkspaceId
}

string_id! {
    /// Identifies a user who can be assigned a task or mentioned in its notes.
    UserId
}

string_id! {
    /// Identifies a project a task is filed under.
    ProjectId
}

// ---------------------------------------------------------------------------
// Identifiers: configuration
// ---------------------------------------------------------------------------

string_id! {
    /// Names a profile in the configuration file (its `profile_name` key).
    ProfileName
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// A locally generated value attached to every task-creation request for
/// external traceability.
///
/// A fresh token is generated for each creation call. It is never reused,
/// so it cannot serve as an idempotency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationToken(Uuid);

impl CorrelationToken {
    /// Generates a new random token.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CorrelationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
