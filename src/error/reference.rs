// Mon Oct 19 2026 - Alex

use crate::error::{ErrorKind, LibraryError, LibraryFailure, MajorClass};
use std::fmt;

/// A reference that does not resolve to a valid object in the hierarchy,
/// for example one whose target was deleted or whose handle went stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceError {
    message: Option<String>,
    // Native detail carried over when narrowed from a classified stack.
    major: Option<MajorClass>,
    minor: Option<String>,
}

impl ReferenceError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", ErrorKind::Reference, message),
            None => write!(f, "{}", ErrorKind::Reference),
        }
    }
}

impl std::error::Error for ReferenceError {}

impl LibraryFailure for ReferenceError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Reference
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<ReferenceError> for LibraryError {
    fn from(err: ReferenceError) -> Self {
        let mut base = match err.message {
            Some(message) => LibraryError::with_message(ErrorKind::Reference, message),
            None => LibraryError::new(ErrorKind::Reference),
        };
        if let Some(major) = err.major {
            base = base.with_major(major);
        }
        if let Some(minor) = err.minor {
            base = base.with_minor(minor);
        }
        base
    }
}

/// Narrowing from the base kind. Anything not tagged `Reference` is handed
/// back untouched so the caller can keep propagating it.
impl TryFrom<LibraryError> for ReferenceError {
    type Error = LibraryError;

    fn try_from(err: LibraryError) -> Result<Self, Self::Error> {
        if !err.is_reference() {
            return Err(err);
        }
        let major = err.major().cloned();
        let minor = err.minor().map(str::to_string);
        Ok(Self {
            message: err.into_message(),
            major,
            minor,
        })
    }
}
