use std::io;
use std::path::PathBuf;

use super::assert_windows;
use crate::app_name::{is_valid_app_name, AppNamePredicate};
use crate::error::{UtilsError, UtilsResult};
use crate::host::{HostEnv, PROP_USER_DESKTOP};

pub const LOCAL_APP_DATA_VAR: &str = "LOCALAPPDATA";
pub const USER_PROFILE_VAR: &str = "USERPROFILE";

const HOME_CACHE_DIR: &str = ".cache";
const CACHE_SUBDIR: &str = "cache";
const LOG_SUBDIR: &str = "log";
const DESKTOP_SUBDIR: &str = "Desktop";

/// Per-application directories. Names are checked with an injected
/// predicate before they become path segments.
#[derive(Debug, Clone, Copy)]
pub struct AppDirs<'a> {
    host: &'a HostEnv,
    is_valid_name: AppNamePredicate,
}

impl<'a> AppDirs<'a> {
    pub fn new(host: &'a HostEnv) -> Self {
        Self::with_validator(host, is_valid_app_name)
    }

    pub fn with_validator(host: &'a HostEnv, is_valid_name: AppNamePredicate) -> Self {
        Self {
            host,
            is_valid_name,
        }
    }

    /// `<LOCALAPPDATA>/<app>/cache`, else `~/.cache/<app>`.
    pub fn cache_dir(&self, app_name: &str) -> UtilsResult<PathBuf> {
        self.validate(app_name)?;
        if let Some(root) = self.local_app_data() {
            return Ok(root.join(app_name).join(CACHE_SUBDIR));
        }
        Ok(self.home_cache()?.join(app_name))
    }

    /// `<LOCALAPPDATA>/<app>/log`, else `~/.cache/<app>/log`.
    pub fn log_dir(&self, app_name: &str) -> UtilsResult<PathBuf> {
        self.validate(app_name)?;
        if let Some(root) = self.local_app_data() {
            return Ok(root.join(app_name).join(LOG_SUBDIR));
        }
        Ok(self.home_cache()?.join(app_name).join(LOG_SUBDIR))
    }

    /// Resolves the log directory and makes sure it exists.
    pub fn provide_log_dir(&self, app_name: &str) -> UtilsResult<PathBuf> {
        let dir = self.log_dir(app_name)?;
        if dir.is_dir() {
            return Ok(dir);
        }

        std::fs::create_dir_all(&dir).map_err(|source| UtilsError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        if !dir.is_dir() {
            return Err(UtilsError::CreateDir {
                path: dir,
                source: io::Error::new(io::ErrorKind::Other, "not a directory after creation"),
            });
        }
        tracing::debug!("created log directory {}", dir.display());
        Ok(dir)
    }

    /// The current user's desktop: `<USERPROFILE>/Desktop`, else the
    /// desktop recorded in the snapshot. Windows only.
    pub fn desktop_dir(&self) -> UtilsResult<PathBuf> {
        assert_windows(self.host)?;
        if let Some(profile) = self.host.non_empty_var(USER_PROFILE_VAR) {
            return Ok(PathBuf::from(profile).join(DESKTOP_SUBDIR));
        }
        self.host
            .property(PROP_USER_DESKTOP)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| UtilsError::NotFound("desktop directory of the current user".to_string()))
    }

    fn validate(&self, app_name: &str) -> UtilsResult<()> {
        if (self.is_valid_name)(app_name) {
            Ok(())
        } else {
            Err(UtilsError::InvalidArgument(format!(
                "invalid app name: {app_name}"
            )))
        }
    }

    fn local_app_data(&self) -> Option<PathBuf> {
        self.host.non_empty_var(LOCAL_APP_DATA_VAR).map(PathBuf::from)
    }

    fn home_cache(&self) -> UtilsResult<PathBuf> {
        self.host
            .home_dir()
            .map(|home| home.join(HOME_CACHE_DIR))
            .ok_or_else(|| UtilsError::IllegalState("user home directory is unknown".to_string()))
    }
}
