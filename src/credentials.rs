use crate::config::ConfigError;

pub const USERNAME_VAR: &str = "CMEMS_USERNAME";
pub const PASSWORD_VAR: &str = "CMEMS_PASSWORD";

/// Copernicus Marine account credentials, passed to the downloader explicitly
/// so the core logic never touches the process environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[allow(dead_code)]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `CMEMS_USERNAME` and `CMEMS_PASSWORD`.
    /// Fails naming the first variable that is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username =
            std::env::var(USERNAME_VAR).map_err(|_| ConfigError::MissingCredential(USERNAME_VAR))?;
        let password =
            std::env::var(PASSWORD_VAR).map_err(|_| ConfigError::MissingCredential(PASSWORD_VAR))?;

        Ok(Credentials { username, password })
    }
}
