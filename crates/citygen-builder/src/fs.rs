//! Filesystem operations used by the builder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BuildError + '_ {
    move |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Remove `dir` with everything in it, then create it empty.
pub(crate) fn reset_dir(dir: &Path) -> Result<(), BuildError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(io_error(dir))?;
    }
    fs::create_dir_all(dir).map_err(io_error(dir))
}

/// Copy `source` into `dir` under `filename`.
pub(crate) fn copy_asset(source: &Path, dir: &Path, filename: &str) -> Result<PathBuf, BuildError> {
    if !source.is_file() {
        return Err(BuildError::MissingAsset(source.to_path_buf()));
    }
    let target = dir.join(filename);
    fs::copy(source, &target).map_err(io_error(&target))?;
    Ok(target)
}

/// Write `content` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(path, content).map_err(io_error(path))
}

/// File holding the page served at `canonical_path`: `{dir}/{path}/index.html`.
pub(crate) fn page_file(dir: &Path, canonical_path: &str) -> PathBuf {
    let relative = canonical_path.trim_matches('/');
    if relative.is_empty() {
        dir.join("index.html")
    } else {
        dir.join(relative).join("index.html")
    }
}
