// Mon Oct 19 2026 - Alex

use crate::config::{ReportConfig, WalkDirection};
use crate::error::{BindingError, ErrorKind, LibraryError, MajorClass};
use serde::{Deserialize, Serialize};

/// One frame of the native library's error stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub major: MajorClass,
    pub minor: Option<String>,
    pub function: String,
    pub file: String,
    pub line: u32,
    pub description: String,
}

impl ErrorRecord {
    pub fn new(major: MajorClass, function: &str, description: &str) -> Self {
        Self {
            major,
            minor: None,
            function: function.to_string(),
            file: String::new(),
            line: 0,
            description: description.to_string(),
        }
    }

    pub fn with_minor(mut self, minor: &str) -> Self {
        self.minor = Some(minor.to_string());
        self
    }

    pub fn with_location(mut self, file: &str, line: u32) -> Self {
        self.file = file.to_string();
        self.line = line;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_major(&self.major)
    }
}

/// Snapshot of the native error stack. Records are kept in push order:
/// the innermost failure first and the public API frame last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStack {
    records: Vec<ErrorRecord>,
}

impl ErrorStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ErrorRecord) {
        self.records.push(record);
    }

    pub fn with_record(mut self, record: ErrorRecord) -> Self {
        self.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn api_record(&self) -> Option<&ErrorRecord> {
        self.records.last()
    }

    pub fn origin_record(&self) -> Option<&ErrorRecord> {
        self.records.first()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Classifies the stack by its innermost frame, where the failure was
    /// first detected. The message is that frame's minor error text, or its
    /// description when the frame has no minor error.
    pub fn to_error(&self) -> LibraryError {
        let record = match self.origin_record() {
            Some(record) => record,
            None => {
                log::debug!("Empty error stack, reporting unclassified library error");
                return LibraryError::new(ErrorKind::Library);
            }
        };

        let kind = record.kind();
        log::debug!(
            "Classified {} from {}() as {}",
            record.major,
            record.function,
            kind
        );

        let text = record.minor.as_deref().unwrap_or(record.description.as_str());
        let mut error = if text.is_empty() {
            LibraryError::new(kind)
        } else {
            LibraryError::with_message(kind, text)
        };
        error = error.with_major(record.major.clone());
        if let Some(minor) = &record.minor {
            error = error.with_minor(minor.clone());
        }
        error
    }

    pub fn render(&self, config: &ReportConfig) -> String {
        let mut ordered: Vec<&ErrorRecord> = self.records.iter().collect();
        if config.walk == WalkDirection::Downward {
            ordered.reverse();
        }
        if let Some(depth) = config.max_depth {
            ordered.truncate(depth);
        }

        let pad = " ".repeat(config.indent);
        let mut output = String::new();

        for (index, record) in ordered.iter().enumerate() {
            output.push_str(&format!("#{:03}: ", index));
            if config.include_location && !record.file.is_empty() {
                output.push_str(&format!("{} line {} in ", record.file, record.line));
            }
            output.push_str(&format!("{}(): {}\n", record.function, record.description));
            output.push_str(&format!(
                "{}major: {}\n",
                pad,
                record.major.description()
            ));
            if config.include_minor {
                if let Some(minor) = &record.minor {
                    output.push_str(&format!("{}minor: {}\n", pad, minor));
                }
            }
        }

        output
    }

    pub fn to_json(&self) -> Result<String, BindingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, BindingError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&ErrorStack> for LibraryError {
    fn from(stack: &ErrorStack) -> Self {
        stack.to_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceError;

    fn dereference_stack() -> ErrorStack {
        ErrorStack::new()
            .with_record(
                ErrorRecord::new(MajorClass::Ohdr, "H5O_open_by_loc", "unable to open object header")
                    .with_minor("Unable to load metadata into cache")
                    .with_location("H5Oint.c", 512),
            )
            .with_record(
                ErrorRecord::new(MajorClass::Reference, "H5Rdereference2", "unable to dereference object")
                    .with_minor("Can't open object")
                    .with_location("H5R.c", 301),
            )
    }

    #[test]
    fn test_api_and_origin_records() {
        let stack = dereference_stack();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.api_record().unwrap().function, "H5Rdereference2");
        assert_eq!(stack.origin_record().unwrap().function, "H5O_open_by_loc");
    }

    #[test]
    fn test_classifies_by_innermost_frame() {
        let err = dereference_stack().to_error();
        assert_eq!(err.kind(), ErrorKind::ObjectHeader);
        assert_eq!(err.major(), Some(&MajorClass::Ohdr));
        assert_eq!(err.minor(), Some("Unable to load metadata into cache"));
        assert_eq!(err.message(), Some("Unable to load metadata into cache"));
        assert!(ReferenceError::try_from(err).is_err());
    }

    #[test]
    fn test_classifies_reference_origin() {
        let stack = ErrorStack::new()
            .with_record(
                ErrorRecord::new(MajorClass::Reference, "H5R__dereference", "unable to dereference object")
                    .with_minor("Can't open object"),
            )
            .with_record(ErrorRecord::new(MajorClass::Reference, "H5Rdereference2", "unable to dereference"));
        let err = stack.to_error();
        assert_eq!(err.kind(), ErrorKind::Reference);

        let reference = ReferenceError::try_from(err).unwrap();
        assert_eq!(reference.message(), Some("Can't open object"));
    }

    #[test]
    fn test_description_used_without_minor() {
        let stack = ErrorStack::new().with_record(ErrorRecord::new(MajorClass::Sym, "H5G__open_name", "group not found"));
        assert_eq!(stack.to_error().message(), Some("group not found"));
    }

    #[test]
    fn test_clear() {
        let mut stack = dereference_stack();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.to_error().kind(), ErrorKind::Library);
    }

    #[test]
    fn test_empty_description_has_no_message() {
        let stack = ErrorStack::new().with_record(ErrorRecord::new(MajorClass::Reference, "H5Rget_name", ""));
        assert_eq!(stack.to_error().message(), None);
    }

    #[test]
    fn test_empty_stack_is_unclassified() {
        let err = ErrorStack::new().to_error();
        assert_eq!(err.kind(), ErrorKind::Library);
        assert_eq!(err.message(), None);
        assert_eq!(err.major(), None);
    }

    #[test]
    fn test_unknown_major_is_unclassified() {
        let stack = ErrorStack::new().with_record(ErrorRecord::new(
            MajorClass::from_symbol("H5E_VOL"),
            "H5VL_object",
            "connector failure",
        ));
        let err = stack.to_error();
        assert_eq!(err.kind(), ErrorKind::Library);
        assert_eq!(err.message(), Some("connector failure"));
    }

    #[test]
    fn test_render_downward() {
        let text = dereference_stack().render(&ReportConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#000: H5R.c line 301 in H5Rdereference2(): unable to dereference object");
        assert_eq!(lines[1], "    major: References");
        assert_eq!(lines[2], "    minor: Can't open object");
        assert!(lines[3].starts_with("#001: H5Oint.c line 512 in H5O_open_by_loc()"));
    }

    #[test]
    fn test_render_upward_limited() {
        let config = ReportConfig::new()
            .with_walk(WalkDirection::Upward)
            .with_max_depth(1)
            .with_location(false)
            .with_minor(false)
            .with_indent(2);
        let text = dereference_stack().render(&config);
        assert_eq!(
            text,
            "#000: H5O_open_by_loc(): unable to open object header\n  major: Object header\n"
        );
    }

    #[test]
    fn test_json_export() {
        let stack = dereference_stack();
        let json = stack.to_json().unwrap();
        assert!(json.contains("H5Rdereference2"));
        assert!(json.contains("\"H5E_REFERENCE\""));
        assert!(json.contains("\"H5E_OHDR\""));
        assert_eq!(ErrorStack::from_json(&json).unwrap(), stack);
    }

    #[test]
    fn test_render_unknown_major_keeps_symbol() {
        let stack = ErrorStack::new().with_record(ErrorRecord::new(
            MajorClass::from_symbol("H5E_VOL"),
            "H5VL_object",
            "connector failure",
        ));
        let text = stack.render(&ReportConfig::default());
        assert!(text.contains("    major: H5E_VOL\n"));
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = ErrorStack::from_json("{not json").unwrap_err();
        assert!(matches!(err, BindingError::Serialization(_)));
    }
}
