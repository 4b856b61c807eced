use log::warn;
use luxwear_protocol::UnknownSectionId;
use thiserror::Error;

use crate::observer::ObserverError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The caller named a section outside the registry. Content and
    /// registry disagree; this is a programming error.
    #[error("unknown section: {0:?}")]
    UnknownSection(String),
    #[error(transparent)]
    Observer(#[from] ObserverError),
}

impl From<UnknownSectionId> for PageError {
    fn from(err: UnknownSectionId) -> Self {
        PageError::UnknownSection(err.0)
    }
}

/// What to do with a [`PageError`] at the rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Propagate: fail fast while developing.
    Strict,
    /// Log at warn level and carry on with a neutral value.
    Lenient,
}

impl ErrorPolicy {
    pub fn absorb<T>(self, result: Result<T, PageError>, fallback: T) -> Result<T, PageError> {
        match (self, result) {
            (_, Ok(value)) => Ok(value),
            (ErrorPolicy::Strict, Err(err)) => Err(err),
            (ErrorPolicy::Lenient, Err(err)) => {
                warn!("ignoring page error: {err}");
                Ok(fallback)
            }
        }
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Lenient
        }
    }
}
