//! Error types for pulse-auth

use thiserror::Error;

use crate::auth::AuthError;

/// Main error type for pulse-auth
#[derive(Error, Debug)]
pub enum PulseAuthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

pub type Result<T> = std::result::Result<T, PulseAuthError>;
