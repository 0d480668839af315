//! Shared path helpers reused by configuration and launch resolution.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Returns true if `name` is a single normal path component (`main.py`, not `app/main.py` or `..`).
pub fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.ends_with('/')
}

/// Resolve `path` against the process's current directory when it is relative.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if is_nonempty_absolute(path) {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
