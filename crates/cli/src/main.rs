//! asana_xt CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse arguments**: `--profile` (required), `--config` (defaults to
//!    `asana_xt.json`) and `--log-format`.
//! 2. **Wire observability**: configure `tracing-subscriber` with a text or
//!    JSON layer on stderr and, when `OTEL_EXPORTER_OTLP_ENDPOINT` is set, an
//!    OpenTelemetry OTLP exporter.
//! 3. **Load configuration**: select the profile and resolve its notes into a
//!    `<body>` envelope.
//! 4. **Construct infrastructure**: read `ASANA_API_TOKEN`, build the
//!    [`asana::AsanaClient`] and inject it into [`TicketOrchestrator`].
//! 5. **Report**: print `Task created successfully: <response>` or
//!    `Error: <message>` on stdout. The exit status is the same either way.

mod credential;
mod error;
mod notes;
mod profile;
mod telemetry;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use asana::{AsanaClient, AsanaConfig};
use orchestrator::{TicketOrchestrator, TicketRequest};
use ticket::{ProfileName, TaskCreated};

use crate::credential::read_credential;
use crate::error::{AppError, ConfigError};
use crate::notes::get_notes_content;
use crate::profile::{load_profile, DEFAULT_CONFIG_FILE};
use crate::telemetry::LogFormat;

/// Create an Asana ticket based on profile details.
#[derive(Debug, Parser)]
#[command(name = "asana_xt", version)]
struct Args {
    /// Profile name from the JSON file.
    #[arg(long)]
    profile: String,

    /// Path to the JSON configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Format of diagnostic output on stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let telemetry = telemetry::init(args.log_format)?;

    match run(&args).await {
        Ok(created) => println!("Task created successfully: {}", created.body),
        Err(err) => {
            debug!(error = ?err, "invocation failed");
            println!("Error: {err}");
        }
    }

    telemetry.shutdown();
    Ok(())
}

#[tracing::instrument(skip(args), fields(profile = %args.profile))]
async fn run(args: &Args) -> Result<TaskCreated, AppError> {
    let profile_name =
        ProfileName::new(args.profile.as_str()).ok_or_else(|| ConfigError::ProfileNotFound {
            name: args.profile.clone(),
            path: args.config.clone(),
        })?;
    let profile = load_profile(&args.config, &profile_name)?;
    let notes_html = get_notes_content(&profile.notes)?;

    let credential = read_credential(|var| std::env::var(var).ok())?;
    let client = AsanaClient::new(AsanaConfig::new(credential))?;
    let orchestrator = TicketOrchestrator::new(Arc::new(client));

    let request = TicketRequest {
        subject: profile.subject,
        notes_html,
        project_name: profile.project_name,
        assignee_name: profile.assignee_name,
    };
    Ok(orchestrator.create_ticket(&request).await?)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn config_defaults_to_the_fixed_file_name() {
        let args = Args::try_parse_from(["asana_xt", "--profile", "bug"]).expect("valid args");

        assert_eq!(args.profile, "bug");
        assert_eq!(args.config, PathBuf::from("asana_xt.json"));
        assert_eq!(args.log_format, LogFormat::Text);
    }

    #[test]
    fn config_and_log_format_can_be_overridden() {
        let args = Args::try_parse_from([
            "asana_xt",
            "--profile",
            "bug",
            "--config",
            "/etc/asana_xt/profiles.json",
            "--log-format",
            "json",
        ])
        .expect("valid args");

        assert_eq!(args.config, PathBuf::from("/etc/asana_xt/profiles.json"));
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn profile_is_required() {
        assert!(Args::try_parse_from(["asana_xt"]).is_err());
    }

    #[tokio::test]
    async fn unknown_profile_is_reported_before_any_remote_call() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = dir.path().join("asana_xt.json");
        std::fs::write(&config, r#"{"profiles": []}"#).expect("write config");
        let args = Args {
            profile: "bug".to_owned(),
            config,
            log_format: LogFormat::Text,
        };

        let err = run(&args).await.expect_err("profile is absent");

        assert!(matches!(
            err,
            AppError::Config(ConfigError::ProfileNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn empty_profile_name_is_reported_as_not_found() {
        let args = Args {
            profile: String::new(),
            config: PathBuf::from("asana_xt.json"),
            log_format: LogFormat::Text,
        };

        let err = run(&args).await.expect_err("empty profile never matches");

        assert_eq!(err.to_string(), "Profile '' not found in asana_xt.json.");
    }
}
