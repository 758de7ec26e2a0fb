//! Thin wrappers over filesystem system calls. Each function issues exactly
//! one call and turns a failure into an [`OsError`].

mod error;
#[cfg(unix)]
mod sys;

pub use error::{OsError, Result};
#[cfg(unix)]
pub use sys::{available, symlink, usage};

/// Path queried when the caller has no specific filesystem in mind.
pub const DEFAULT_PATH: &str = "/";
