// Mon Oct 19 2026 - Alex

use crate::error::{BindingError, ErrorStack, Result};

/// Checks a native status return. Negative values are failures and are
/// classified from the error stack produced by `capture`.
pub fn check_status<F>(status: i32, capture: F) -> Result<i32>
where
    F: FnOnce() -> ErrorStack,
{
    if status < 0 {
        return Err(BindingError::Library(capture().to_error()));
    }
    Ok(status)
}

/// Same as [`check_status`] for identifiers, where any negative id is invalid.
pub fn check_id<F>(id: i64, capture: F) -> Result<i64>
where
    F: FnOnce() -> ErrorStack,
{
    if id < 0 {
        return Err(BindingError::Library(capture().to_error()));
    }
    Ok(id)
}

/// A failure on the binding side of the boundary, never reported by the
/// library itself.
pub fn binding_failure(message: impl Into<String>) -> BindingError {
    BindingError::Binding {
        message: message.into(),
    }
}
