//! Filesystem helpers for locating co-located resources.

use std::io;
use std::path::{Path, PathBuf};

/// Absolute directory containing `file`.
///
/// Relative paths are resolved against the current working directory. The
/// file itself does not need to exist.
pub fn file_dir(file: impl AsRef<Path>) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(file.as_ref())?;
    Ok(absolute
        .parent()
        .map_or_else(|| absolute.clone(), Path::to_path_buf))
}

#[cfg(test)]
mod tests;
