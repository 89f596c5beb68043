use std::path::Path;

/// Receives recoverable problems found while generating files
pub trait DiagnosticSink {
    /// An expected input file is absent; generation carries on without it
    fn missing_resource(&self, path: &Path);
}

/// Reports through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn missing_resource(&self, path: &Path) {
        info!(
            "could not find options file (this may be normal): {}",
            xx::file::display_path(path)
        );
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub missing: std::cell::RefCell<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn missing_resource(&self, path: &Path) {
        self.missing.borrow_mut().push(path.to_path_buf());
    }
}
