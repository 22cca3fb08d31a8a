use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
#[cfg(any(target_os = "macos", target_os = "windows"))]
use std::process::ExitStatus;
use std::sync::Arc;

use url::Url;

use crate::error::{UtilsError, UtilsResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchAction {
    Browse,
    Open,
    Edit,
}

impl LaunchAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchAction::Browse => "browse",
            LaunchAction::Open => "open",
            LaunchAction::Edit => "edit",
        }
    }
}

impl fmt::Display for LaunchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a launch call points at: a URI to browse or a filesystem path.
#[derive(Debug, Clone, Copy)]
pub enum LaunchTarget<'a> {
    Uri(&'a Url),
    Path(&'a Path),
}

impl<'a> LaunchTarget<'a> {
    pub fn as_os_str(&self) -> &'a OsStr {
        match self {
            LaunchTarget::Uri(uri) => OsStr::new(uri.as_str()),
            LaunchTarget::Path(path) => path.as_os_str(),
        }
    }
}

impl fmt::Display for LaunchTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchTarget::Uri(uri) => f.write_str(uri.as_str()),
            LaunchTarget::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Native desktop-integration facility.
pub trait DesktopIntegration: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    /// External program the adapter runs, if any. The launcher does not
    /// retry it as a fallback after a native failure.
    fn program(&self) -> Option<&str> {
        None
    }

    fn supports(&self, _action: LaunchAction) -> bool {
        false
    }

    fn perform(&self, _action: LaunchAction, _target: LaunchTarget<'_>) -> UtilsResult<()> {
        Err(UtilsError::NotImplemented)
    }
}

pub type SharedDesktop = Arc<dyn DesktopIntegration>;

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn ensure_command_success(status: ExitStatus, command_label: &str) -> UtilsResult<()> {
    if status.success() {
        Ok(())
    } else {
        Err(UtilsError::Internal(format!(
            "{command_label} failed with status {status}"
        )))
    }
}

#[cfg(target_os = "macos")]
pub mod macos;
pub mod unsupported;
#[cfg(target_os = "windows")]
pub mod windows;
