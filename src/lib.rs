// Mon Oct 19 2026 - Alex

pub mod config;
pub mod error;
pub mod utils;

pub use config::{ConfigError, ReportConfig, WalkDirection};
pub use error::{
    BindingError, ErrorKind, ErrorRecord, ErrorStack, LibraryError, LibraryFailure, MajorClass,
    ReferenceError, Result,
};
pub use utils::LoggingUtils;
