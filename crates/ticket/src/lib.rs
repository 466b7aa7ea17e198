//! Core ticket domain for asana_xt.
//!
//! This crate contains every domain concept used to turn a profile into a
//! remote task: newtype identifiers, the remote entities, the task-creation
//! request, the error taxonomy, the mention resolver, and the
//! [`TaskService`] port. Infrastructure crates implement the port; they never
//! add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`WorkspaceId`, `UserId`, `CorrelationToken`, etc.) |
//! | [`types`] | Remote entities, `TaskDraft`, `TaskCreated`, `MentionResolution` |
//! | [`errors`] | `TicketError`, `LookupError`, `TransportError` |
//! | [`mentions`] | `@[Name]` placeholder rewriting |
//! | [`ports`] | The `TaskService` trait |

pub mod errors;
pub mod identifiers;
pub mod mentions;
pub mod ports;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{LookupError, TicketError, TransportError};
pub use identifiers::{CorrelationToken, ProfileName, ProjectId, UserId, WorkspaceId};
pub use mentions::{mention_markup, resolve_mentions};
pub use ports::TaskService;
pub use types::{
    find_by_name, MentionResolution, Named, Project, TaskCreated, TaskDraft, User, Workspace,
};
