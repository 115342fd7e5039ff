use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid tier level {0}; must be 0 through 5")]
    InvalidTierLevel(u8),

    #[error("unknown collaboration status: {0}")]
    UnknownStatus(String),

    #[error("unknown collaboration category: {0}")]
    UnknownCategory(String),

    #[error("unknown user type: {0}")]
    UnknownUserType(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[from] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
