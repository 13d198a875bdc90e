use std::fmt::{Display, Formatter, Result};

use project::ProjectError;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    ProjectError(String),
    InvalidState(String),
    InvalidInput(String),
    UnknownItem(String),
    CancelNotAllowed,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::ProjectError(message) => write!(f, "Project error: {}", message),
            Error::InvalidState(message) => write!(f, "Invalid state: {}", message),
            Error::InvalidInput(message) => write!(f, "Invalid input: {}", message),
            Error::UnknownItem(message) => write!(f, "Unknown item: {}", message),
            Error::CancelNotAllowed => {
                write!(f, "Cancellation is only allowed before the first commit")
            }
        }
    }
}

impl From<ProjectError> for Error {
    fn from(err: ProjectError) -> Self {
        Error::ProjectError(err.to_string())
    }
}
