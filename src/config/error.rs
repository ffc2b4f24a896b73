use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    EmptyYears,
    Bbox(String),
    MissingCredential(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyYears => write!(f, "years cannot be empty"),
            ConfigError::Bbox(e) => write!(f, "Invalid bbox: {}", e),
            ConfigError::MissingCredential(var) => {
                write!(f, "Copernicus Marine credential {} not set", var)
            }
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}
