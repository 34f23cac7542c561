// Mon Oct 19 2026 - Alex

pub mod kind;
pub mod library;
pub mod major;
pub mod reference;
pub mod stack;
pub mod status;

pub use kind::ErrorKind;
pub use library::{LibraryError, LibraryFailure};
pub use major::MajorClass;
pub use reference::ReferenceError;
pub use stack::{ErrorRecord, ErrorStack};
pub use status::{binding_failure, check_id, check_status};

use crate::config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BindingError>;

/// Everything a binding call can fail with.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("{0}")]
    Library(#[from] LibraryError),
    #[error("Binding error: {message}")]
    Binding { message: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl BindingError {
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_library().map(LibraryError::kind)
    }

    pub fn as_library(&self) -> Option<&LibraryError> {
        match self {
            BindingError::Library(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.kind() == Some(ErrorKind::Reference)
    }
}

impl From<ReferenceError> for BindingError {
    fn from(err: ReferenceError) -> Self {
        BindingError::Library(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(handle: u64) -> Result<u64> {
        if handle == 0 {
            return Err(ReferenceError::with_message("stale handle").into());
        }
        Ok(handle)
    }

    fn open_attribute(handle: u64) -> Result<u64> {
        let target = resolve(handle)?;
        Ok(target + 1)
    }

    #[test]
    fn test_question_mark_propagation() {
        let err = open_attribute(0).unwrap_err();
        assert!(err.is_reference());
        assert_eq!(err.as_library().unwrap().message(), Some("stale handle"));
        assert_eq!(err.to_string(), "Reference error: stale handle");
        assert_eq!(open_attribute(7).unwrap(), 8);
    }

    #[test]
    fn test_category_handler_catches_every_library_kind() {
        let errors: Vec<BindingError> = vec![
            ReferenceError::new().into(),
            ReferenceError::with_message("stale handle").into(),
            LibraryError::new(ErrorKind::DatatypeInterface).into(),
        ];

        let caught = errors.iter().filter(|e| e.as_library().is_some()).count();
        assert_eq!(caught, 3);

        let references = errors.iter().filter(|e| e.is_reference()).count();
        assert_eq!(references, 2);
    }

    #[test]
    fn test_anyhow_downcast() {
        fn call() -> anyhow::Result<u64> {
            Ok(open_attribute(0)?)
        }

        let err = call().unwrap_err();
        let binding = err.downcast_ref::<BindingError>().unwrap();
        assert!(binding.is_reference());
    }

    #[test]
    fn test_config_error_wraps() {
        let err: BindingError = ConfigError::ValidationError("max_depth must be > 0".to_string()).into();
        assert_eq!(err.kind(), None);
        assert!(err.to_string().starts_with("Config error:"));
    }
}
