//! Locating a Cargo project's base directory.

use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{UtilsError, UtilsResult};
use crate::host::{HostEnv, PROP_PROJECT_BASEDIR};

/// Descriptor file present only at a project root.
pub const PROJECT_MARKER: &str = "Cargo.toml";
/// Build output directory, relative to the project base directory.
pub const TARGET_DIR: &str = "target";

pub fn project_basedir(host: &HostEnv) -> UtilsResult<PathBuf> {
    host.property(PROP_PROJECT_BASEDIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            UtilsError::IllegalState(format!("{PROP_PROJECT_BASEDIR} is not set"))
        })
}

pub fn project_target_dir(host: &HostEnv) -> UtilsResult<PathBuf> {
    Ok(project_basedir(host)?.join(TARGET_DIR))
}

/// Walks up from the directory holding the artifact at `location` until a
/// directory containing [`PROJECT_MARKER`] is found. Only `file:` URLs are
/// accepted; artifacts inside archives or on remote hosts are not.
pub fn basedir_from_location(location: &Url) -> UtilsResult<PathBuf> {
    if location.scheme() != "file" {
        return Err(UtilsError::UnsupportedLocation(format!(
            "artifact has been loaded from a location not starting with file: {location}"
        )));
    }
    let artifact = location.to_file_path().map_err(|()| {
        UtilsError::UnsupportedLocation(format!("not a local file path: {location}"))
    })?;
    let start = artifact.parent().ok_or_else(|| {
        UtilsError::NotFound(format!("{} has no parent directory", artifact.display()))
    })?;

    find_marker_ancestor(start).ok_or_else(|| {
        UtilsError::NotFound(format!(
            "project basedir not found because no parent directory of {} has a {PROJECT_MARKER} entry",
            artifact.display()
        ))
    })
}

/// [`basedir_from_location`] for the running executable.
pub fn basedir_for_executable() -> UtilsResult<PathBuf> {
    let exe = std::env::current_exe()?;
    let location = Url::from_file_path(&exe).map_err(|()| {
        UtilsError::UnsupportedLocation(format!(
            "executable path is not absolute: {}",
            exe.display()
        ))
    })?;
    basedir_from_location(&location)
}

fn find_marker_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_MARKER).is_file())
        .map(Path::to_path_buf)
}
