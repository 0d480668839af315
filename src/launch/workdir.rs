use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::lib::{errors::LaunchError, paths::absolutize};

/// Application directory that has been checked to exist and be a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir(PathBuf);

impl WorkingDir {
    /// Resolve the directory the host supplied.
    ///
    /// `variable` names the environment variable for the unset diagnostic.
    pub fn resolve(supplied: Option<&Path>, variable: &str) -> Result<Self, LaunchError> {
        let raw = supplied.ok_or_else(|| LaunchError::WorkingDirUnset {
            variable: variable.to_string(),
        })?;
        let path = absolutize(raw).map_err(|source| LaunchError::Directory {
            path: raw.to_path_buf(),
            source,
        })?;

        let metadata = fs::metadata(&path).map_err(|source| LaunchError::Directory {
            path: path.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(LaunchError::Directory {
                path,
                source: not_a_directory(),
            });
        }

        debug!(
            target: "app_launcher::launch",
            working_dir = %path.display(),
            "Resolved working directory"
        );
        Ok(Self(path))
    }

    /// Make this the launcher's current directory, as `cd` would.
    pub fn enter(&self) -> Result<(), LaunchError> {
        env::set_current_dir(&self.0).map_err(|source| LaunchError::Directory {
            path: self.0.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// The host's own "not a directory" error, as `chdir` would report it.
fn not_a_directory() -> io::Error {
    #[cfg(unix)]
    {
        io::Error::from_raw_os_error(libc::ENOTDIR)
    }
    #[cfg(not(unix))]
    {
        // ERROR_DIRECTORY
        io::Error::from_raw_os_error(267)
    }
}
