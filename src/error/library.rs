// Mon Oct 19 2026 - Alex

use crate::error::{ErrorKind, MajorClass};
use std::fmt;

/// Capability shared by every failure the native library can report.
///
/// Leaf error types outside this crate implement this to join the taxonomy
/// without touching the existing kinds.
pub trait LibraryFailure: std::error::Error + Send + Sync + 'static {
    fn kind(&self) -> ErrorKind;

    fn message(&self) -> Option<&str>;

    fn to_library_error(&self) -> LibraryError {
        LibraryError::from_failure(self)
    }
}

/// Base library failure: a kind tag plus whatever detail the library gave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryError {
    kind: ErrorKind,
    message: Option<String>,
    major: Option<MajorClass>,
    minor: Option<String>,
}

impl LibraryError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            major: None,
            minor: None,
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            major: None,
            minor: None,
        }
    }

    pub fn from_failure<F: LibraryFailure + ?Sized>(failure: &F) -> Self {
        Self {
            kind: failure.kind(),
            message: failure.message().map(str::to_string),
            major: None,
            minor: None,
        }
    }

    pub fn with_major(mut self, major: MajorClass) -> Self {
        self.major = Some(major);
        self
    }

    pub fn with_minor(mut self, minor: impl Into<String>) -> Self {
        self.minor = Some(minor.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn major(&self) -> Option<&MajorClass> {
        self.major.as_ref()
    }

    pub fn minor(&self) -> Option<&str> {
        self.minor.as_deref()
    }

    pub fn is_reference(&self) -> bool {
        self.kind == ErrorKind::Reference
    }

    pub(crate) fn into_message(self) -> Option<String> {
        self.message
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for LibraryError {}

impl LibraryFailure for LibraryError {
    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn to_library_error(&self) -> LibraryError {
        self.clone()
    }
}
