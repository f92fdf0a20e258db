use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::foundation::error::{SpinError, SpinResult};

/// Write `bytes` to `path` all-or-nothing.
///
/// The data goes to a hidden sibling file first and is renamed over `path`
/// only after it is fully flushed, so readers never observe a truncated file
/// and a failure leaves any previous file at `path` untouched. The parent
/// directory must already exist.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> SpinResult<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| SpinError::encode(format!("'{}' is not a file path", path.display())))?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(SpinError::encode(format!(
            "output directory '{}' does not exist",
            parent.display()
        )));
    }

    let tmp = parent.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        std::process::id()
    ));
    let mut guard = TempFileGuard(Some(tmp.clone()));

    let write = || -> std::io::Result<()> {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()
    };
    write().map_err(|e| SpinError::encode(format!("write '{}': {e}", tmp.display())))?;

    std::fs::rename(&tmp, path)
        .map_err(|e| SpinError::encode(format!("replace '{}': {e}", path.display())))?;
    guard.disarm();
    Ok(())
}

struct TempFileGuard(Option<PathBuf>);

impl TempFileGuard {
    fn disarm(&mut self) {
        self.0 = None;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
