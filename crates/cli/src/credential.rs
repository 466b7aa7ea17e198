//! Bearer-token lookup.
//!
//! The token is read once, at startup, and handed to the client constructor.
//! The lookup is injected so tests never touch the process environment.

use asana::Credential;

use crate::error::ConfigError;

/// Environment variable holding the Asana personal access token.
pub const TOKEN_VAR: &str = "ASANA_API_TOKEN";

/// Reads the credential through `lookup`.
///
/// # Errors
///
/// [`ConfigError::MissingCredential`] when the variable is unset or blank.
pub fn read_credential(
    lookup: impl FnOnce(&str) -> Option<String>,
) -> Result<Credential, ConfigError> {
    match lookup(TOKEN_VAR) {
        Some(token) if !token.trim().is_empty() => Ok(Credential::new(token)),
        _ => Err(ConfigError::MissingCredential { var: TOKEN_VAR }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn token_is_read_from_the_named_variable() {
        let credential = read_credential(|var| {
            assert_eq!(var, "ASANA_API_TOKEN");
            Some("1/abc".to_owned())
        });

        assert!(credential.is_ok());
    }

    #[rstest]
    #[case::unset(None)]
    #[case::blank(Some("   ".to_owned()))]
    fn absent_token_is_a_configuration_error(#[case] value: Option<String>) {
        let err = read_credential(|_| value).expect_err("missing token must fail");

        assert_eq!(
            err.to_string(),
            "ASANA_API_TOKEN environment variable is not set."
        );
    }
}
