use std::ffi::CString;
use std::mem::MaybeUninit;

use crate::error::{OsError, Result};

fn c_path(op: &'static str, path: &str) -> Result<CString> {
    CString::new(path).map_err(|_| OsError::nul_in_path(op, path))
}

fn statvfs(op: &'static str, path: &str) -> Result<libc::statvfs> {
    let c = c_path(op, path)?;
    let mut buf = MaybeUninit::<libc::statvfs>::uninit();

    // SAFETY: `c` is a valid NUL-terminated string and `buf` is only read after
    // the call reports success.
    let rc = unsafe { libc::statvfs(c.as_ptr(), buf.as_mut_ptr()) };
    if rc < 0 {
        return Err(OsError::last(op, path));
    }
    Ok(unsafe { buf.assume_init() })
}

/// Bytes available to unprivileged users on the filesystem containing `path`.
pub fn available(path: &str) -> Result<u64> {
    let res = statvfs("statvfs", path)
        .map(|st| u64::from(st.f_bavail).saturating_mul(u64::from(st.f_frsize)));
    tracing::debug!(path, result = ?res.as_ref().ok(), "fs available");
    res
}

/// Fraction of the filesystem containing `path` that is in use, in `[0, 1]`.
///
/// A filesystem that reports no blocks at all is treated as empty.
pub fn usage(path: &str) -> Result<f64> {
    let res = statvfs("statvfs", path).map(|st| {
        let blocks = u64::from(st.f_blocks);
        if blocks == 0 {
            return 0.0;
        }
        blocks.saturating_sub(u64::from(st.f_bfree)) as f64 / blocks as f64
    });
    tracing::debug!(path, result = ?res.as_ref().ok(), "fs usage");
    res
}

/// Creates `link` as a symbolic link pointing at `original`.
pub fn symlink(original: &str, link: &str) -> Result<()> {
    let target = c_path("symlink", original)?;
    let name = c_path("symlink", link)?;

    // SAFETY: both arguments are valid NUL-terminated strings.
    let rc = unsafe { libc::symlink(target.as_ptr(), name.as_ptr()) };
    if rc < 0 {
        let err = OsError::last("symlink", link);
        tracing::debug!(original, link, error = %err, "fs symlink");
        return Err(err);
    }
    tracing::debug!(original, link, "fs symlink");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error;
    use std::io;

    type TestResult = std::result::Result<(), Box<dyn Error>>;

    fn path_str(p: &std::path::Path) -> String {
        p.to_string_lossy().into_owned()
    }

    #[test]
    fn available_and_usage_for_existing_path() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = path_str(dir.path());

        available(&path)?;
        let used = usage(&path)?;
        assert!((0.0..=1.0).contains(&used), "usage out of range: {used}");
        Ok(())
    }

    #[test]
    fn missing_path_reports_os_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let missing = path_str(&dir.path().join("does-not-exist"));

        let err = match available(&missing) {
            Ok(v) => panic!("expected error, got {v}"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.code(), Some(libc::ENOENT));
        assert_eq!(err.op, "statvfs");
        assert_eq!(err.path, missing);

        let err = match usage(&missing) {
            Ok(v) => panic!("expected error, got {v}"),
            Err(err) => err,
        };
        assert_eq!(err.code(), Some(libc::ENOENT));
        assert!(err.to_string().starts_with("statvfs '"));
        Ok(())
    }

    #[test]
    fn symlink_creates_link_to_original() -> TestResult {
        let dir = tempfile::tempdir()?;
        let original = dir.path().join("original.txt");
        std::fs::write(&original, b"hello")?;
        let link = dir.path().join("link.txt");

        symlink(&path_str(&original), &path_str(&link))?;

        assert!(std::fs::symlink_metadata(&link)?.file_type().is_symlink());
        assert_eq!(std::fs::read_link(&link)?, original);
        assert_eq!(std::fs::read(&link)?, b"hello");
        Ok(())
    }

    #[test]
    fn symlink_fails_when_link_exists() -> TestResult {
        let dir = tempfile::tempdir()?;
        let link = dir.path().join("taken");
        std::fs::write(&link, b"")?;

        let err = match symlink("/", &path_str(&link)) {
            Ok(()) => panic!("expected error"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(err.code(), Some(libc::EEXIST));
        Ok(())
    }

    #[test]
    fn nul_byte_in_path_is_rejected_before_the_call() {
        let err = match available("bad\0path") {
            Ok(v) => panic!("expected error, got {v}"),
            Err(err) => err,
        };
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.code(), None);
    }
}
