//! asana_xt Asana infrastructure adapter.
//!
//! Implements the [`ticket::TaskService`] trait for the Asana REST API
//! (`https://app.asana.com/api/1.0`). Four endpoints are used:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | `fetch_workspaces` | `GET /workspaces` |
//! | `fetch_users` | `GET /users` |
//! | `fetch_projects` | `GET /projects` |
//! | `create_task` | `POST /tasks` |
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** All HTTP transport, authentication headers, envelope
//! decoding and payload formatting live here. The [`ticket`] crate sees only
//! [`ticket::TaskService`].
//!
//! Pagination, rate limiting and retries are not handled. In particular a
//! failed `create_task` is never retried, because each call carries a new
//! correlation token and a retry could create a duplicate task.

mod client;
mod config;
mod error;
mod wire;

pub use client::AsanaClient;
pub use config::{AsanaConfig, Credential, DEFAULT_BASE_URL};
pub use error::AsanaError;
