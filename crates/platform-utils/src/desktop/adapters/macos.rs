use std::process::Command;

use super::{ensure_command_success, DesktopIntegration, LaunchAction, LaunchTarget};
use crate::error::{UtilsError, UtilsResult};

/// LaunchServices through `open`; `-t` opens with the default text editor.
#[derive(Debug, Default)]
pub struct MacosDesktop;

impl MacosDesktop {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopIntegration for MacosDesktop {
    fn id(&self) -> &str {
        "macos"
    }

    fn program(&self) -> Option<&str> {
        Some("open")
    }

    fn supports(&self, _action: LaunchAction) -> bool {
        true
    }

    fn perform(&self, action: LaunchAction, target: LaunchTarget<'_>) -> UtilsResult<()> {
        let mut command = Command::new("open");
        let label = match action {
            LaunchAction::Edit => {
                command.arg("-t");
                "open -t"
            }
            LaunchAction::Browse | LaunchAction::Open => "open",
        };
        let status = command
            .arg(target.as_os_str())
            .status()
            .map_err(|error| UtilsError::Internal(format!("failed to run {label}: {error}")))?;
        ensure_command_success(status, label)
    }
}
