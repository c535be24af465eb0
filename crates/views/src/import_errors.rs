//! Import error log: rejected input rows kept for display.

use crate::read_model::ReadModel;

/// An input row that could not be imported, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    data_input: String,
    error_message: String,
}

impl ImportError {
    pub fn new(data_input: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            data_input: data_input.into(),
            error_message: error_message.into(),
        }
    }

    /// Returns the raw input that was rejected.
    pub fn data_input(&self) -> &str {
        &self.data_input
    }

    /// Returns why the input was rejected.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_message, self.data_input)
    }
}

/// Collects rejected rows from an import, in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct ImportErrorLog {
    errors: Vec<ImportError>,
}

impl ImportErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rejected row.
    pub fn record(&mut self, data_input: impl Into<String>, error_message: impl Into<String>) {
        let error = ImportError::new(data_input, error_message);
        tracing::warn!(
            input = error.data_input(),
            reason = error.error_message(),
            "import row rejected"
        );
        self.errors.push(error);
    }

    /// Records a rejected row described by any error value.
    pub fn record_error<E: std::error::Error>(&mut self, data_input: impl Into<String>, error: &E) {
        self.record(data_input, error.to_string());
    }

    pub fn errors(&self) -> &[ImportError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Forgets all recorded rows, e.g. before the next import.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl ReadModel for ImportErrorLog {
    fn name(&self) -> &'static str {
        "ImportErrorLog"
    }

    fn count(&self) -> usize {
        self.errors.len()
    }
}
