use std::env;

use crate::error::{MeteomaticsError, Result};

/// Environment variable consulted when `--username` is not given.
pub const USERNAME_ENV: &str = "METEOMATICS_USERNAME";
/// Environment variable consulted when `--password` is not given.
pub const PASSWORD_ENV: &str = "METEOMATICS_PASSWORD";

/// HTTP Basic credentials for the API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Resolve credentials from explicit arguments, falling back to the
    /// environment. Empty strings count as absent.
    pub fn resolve(username: Option<String>, password: Option<String>) -> Result<Self> {
        let username = non_empty(username).or_else(|| non_empty(env::var(USERNAME_ENV).ok()));
        let password = non_empty(password).or_else(|| non_empty(env::var(PASSWORD_ENV).ok()));
        match (username, password) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            _ => Err(MeteomaticsError::MissingCredentials),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Credentials, PASSWORD_ENV, USERNAME_ENV};
    use crate::error::MeteomaticsError;

    #[test]
    fn test_explicit_credentials_win() {
        let creds = Credentials::resolve(Some("user".to_string()), Some("pass".to_string())).unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pass");
    }

    #[test]
    fn test_missing_credentials_are_an_error() {
        std::env::remove_var(USERNAME_ENV);
        std::env::remove_var(PASSWORD_ENV);
        let err = Credentials::resolve(None, None).unwrap_err();
        assert!(matches!(err, MeteomaticsError::MissingCredentials));

        let err = Credentials::resolve(Some(String::new()), Some("pass".to_string())).unwrap_err();
        assert!(matches!(err, MeteomaticsError::MissingCredentials));
    }
}
