//! [`AsanaClient`]: the HTTP implementation of [`TaskService`].

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use ticket::{
    CorrelationToken, Project, TaskCreated, TaskDraft, TaskService, TransportError, User, Workspace,
};

use crate::wire::{CompactRecord, CreateTaskEnvelope, ListEnvelope};
use crate::{AsanaConfig, AsanaError};

const USER_AGENT: &str = concat!("asana_xt/", env!("CARGO_PKG_VERSION"));

/// Talks to the Asana REST API.
///
/// Owns one connection pool for the lifetime of the process. Every request
/// carries the bearer token and JSON `accept`/`content-type` headers. Timeouts
/// are the transport defaults.
#[derive(Debug, Clone)]
pub struct AsanaClient {
    http: reqwest::Client,
    base_url: String,
}

impl AsanaClient {
    /// Builds a client for `config`.
    ///
    /// # Errors
    ///
    /// - [`AsanaError::InvalidCredential`] if the token cannot be sent as a header.
    /// - [`AsanaError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: AsanaConfig) -> Result<Self, AsanaError> {
        let mut authorization = HeaderValue::from_str(&config.credential.bearer())
            .map_err(|_| AsanaError::InvalidCredential)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Issues `GET /{path}` and unwraps the `data` list.
    async fn list<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<Vec<T>, TransportError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| TransportError::new(operation, err.to_string()))?;
        let status = response.status();
        let envelope: ListEnvelope<T> = response
            .json()
            .await
            .map_err(|err| TransportError::new(operation, err.to_string()))?;

        for detail in &envelope.errors {
            warn!(
                operation,
                status = status.as_u16(),
                message = %detail.message,
                "service reported an error"
            );
        }
        debug!(operation, count = envelope.data.len(), "listed records");
        Ok(envelope.data)
    }
}

#[async_trait]
impl TaskService for AsanaClient {
    #[instrument(skip(self))]
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, TransportError> {
        let records: Vec<CompactRecord> = self.list("fetch workspaces", "workspaces").await?;
        Ok(records
            .into_iter()
            .filter_map(CompactRecord::into_workspace)
            .collect())
    }

    #[instrument(skip(self))]
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError> {
        let records: Vec<CompactRecord> = self.list("fetch users", "users").await?;
        Ok(records
            .into_iter()
            .filter_map(CompactRecord::into_user)
            .collect())
    }

    #[instrument(skip(self))]
    async fn fetch_projects(&self) -> Result<Vec<Project>, TransportError> {
        let records: Vec<CompactRecord> = self.list("fetch projects", "projects").await?;
        Ok(records
            .into_iter()
            .filter_map(CompactRecord::into_project)
            .collect())
    }

    #[instrument(
        skip(self, draft),
        fields(project = %draft.project, workspace = %draft.workspace)
    )]
    async fn create_task(&self, draft: &TaskDraft) -> Result<TaskCreated, TransportError> {
        const OPERATION: &str = "create task";

        let correlation = CorrelationToken::generate();
        let response = self
            .http
            .post(self.url("tasks"))
            .json(&CreateTaskEnvelope::new(draft, correlation))
            .send()
            .await
            .map_err(|err| TransportError::new(OPERATION, err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::new(OPERATION, err.to_string()))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                %correlation,
                "task creation returned a non-success status"
            );
        }

        Ok(TaskCreated {
            status: status.as_u16(),
            body,
            correlation,
        })
    }
}
