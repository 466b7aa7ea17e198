//! Error types surfaced at the invocation boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the process configuration: the profile file, the notes
/// source, or the credential.
///
/// All of them are fatal and reported before any remote call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The credential environment variable is absent or blank.
    #[error("{var} environment variable is not set.")]
    MissingCredential {
        /// Name of the variable that was consulted.
        var: &'static str,
    },

    /// The configuration file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON or lacks required keys.
    #[error("{} is not a valid configuration file: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No entry of `profiles` has the requested `profile_name`. An empty
    /// requested name never matches.
    #[error("Profile '{name}' not found in {}.", path.display())]
    ProfileNotFound { name: String, path: PathBuf },

    /// The notes source names an existing file that could not be read.
    #[error("could not read notes file {}: {source}", path.display())]
    NotesUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Every failure category an invocation can end with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] asana::AsanaError),

    #[error(transparent)]
    Ticket(#[from] ticket::TicketError),
}
