use std::io;

pub type Result<T> = std::result::Result<T, OsError>;

/// A failed filesystem query. The message is the OS description of the
/// error code reported by the underlying call.
#[derive(Debug, thiserror::Error)]
#[error("{op} '{path}': {source}")]
pub struct OsError {
    pub op: &'static str,
    pub path: String,
    #[source]
    pub source: io::Error,
}

impl OsError {
    pub(crate) fn last(op: &'static str, path: &str) -> Self {
        Self {
            op,
            path: path.to_string(),
            source: io::Error::last_os_error(),
        }
    }

    pub(crate) fn nul_in_path(op: &'static str, path: &str) -> Self {
        Self {
            op,
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path contains a NUL byte"),
        }
    }

    /// The raw OS error code, if the error came from the OS.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        self.source.raw_os_error()
    }

    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
