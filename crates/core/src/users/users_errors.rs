use thiserror::Error;

/// Errors raised by user directory operations.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User '{0}' was not found")]
    NotFound(String),
}
