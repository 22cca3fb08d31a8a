use std::process::Command;

use super::{ensure_command_success, DesktopIntegration, LaunchAction, LaunchTarget};
use crate::error::{UtilsError, UtilsResult};

/// Shell association through `cmd /C start`. There is no generic "edit"
/// verb reachable this way.
#[derive(Debug, Default)]
pub struct WindowsDesktop;

impl WindowsDesktop {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopIntegration for WindowsDesktop {
    fn id(&self) -> &str {
        "windows"
    }

    fn program(&self) -> Option<&str> {
        Some("cmd")
    }

    fn supports(&self, action: LaunchAction) -> bool {
        matches!(action, LaunchAction::Browse | LaunchAction::Open)
    }

    fn perform(&self, action: LaunchAction, target: LaunchTarget<'_>) -> UtilsResult<()> {
        if !self.supports(action) {
            return Err(UtilsError::NotImplemented);
        }
        let status = Command::new("cmd")
            .arg("/C")
            .arg("start")
            .arg("")
            .arg(target.as_os_str())
            .status()
            .map_err(|error| UtilsError::Internal(format!("failed to run start: {error}")))?;
        ensure_command_success(status, "start")
    }
}
