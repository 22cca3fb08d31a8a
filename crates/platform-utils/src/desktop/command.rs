use std::ffi::{OsStr, OsString};

use serde::{Deserialize, Serialize};

use crate::host::{HostEnv, OsFamily};

/// Placeholder substituted with the launch target inside an argument template.
pub const TARGET_PLACEHOLDER: &str = "%s";

const XDG_SESSION_VAR: &str = "XDG_SESSION_ID";
const GDM_SESSION_VAR: &str = "GDMSESSION";

/// An external opener: program name plus a space-separated argument template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchCommand {
    pub program: String,
    #[serde(default = "default_args")]
    pub args: String,
}

fn default_args() -> String {
    TARGET_PLACEHOLDER.to_string()
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: default_args(),
        }
    }

    pub fn with_args(program: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: args.into(),
        }
    }

    /// Expands the template for `target`. The template is split before
    /// substitution, so a target containing spaces stays one argument.
    pub fn prepare(&self, target: &OsStr) -> Vec<OsString> {
        self.args
            .split(' ')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                let mut arg = OsString::new();
                let mut parts = piece.split(TARGET_PLACEHOLDER);
                if let Some(first) = parts.next() {
                    arg.push(first);
                }
                for rest in parts {
                    arg.push(target);
                    arg.push(rest);
                }
                arg
            })
            .collect()
    }
}

/// Opener commands to try, in order, for the host's platform.
pub fn fallback_commands(host: &HostEnv) -> Vec<LaunchCommand> {
    let programs: Vec<&str> = match host.os_family() {
        OsFamily::Linux => linux_openers(host),
        OsFamily::MacOs => vec!["open"],
        OsFamily::Windows => vec!["explorer"],
        OsFamily::Other => Vec::new(),
    };
    programs.into_iter().map(LaunchCommand::new).collect()
}

fn linux_openers(host: &HostEnv) -> Vec<&'static str> {
    let session = host
        .var(GDM_SESSION_VAR)
        .map(str::to_lowercase)
        .unwrap_or_default();

    let mut preferred = Vec::new();
    if host.non_empty_var(XDG_SESSION_VAR).is_some() {
        preferred.push("xdg-open");
    }
    if session.contains("kde") {
        preferred.push("kde-open");
    }
    if session.contains("gnome") {
        preferred.push("gnome-open");
    }
    preferred.extend(["kde-open", "gnome-open"]);

    let mut programs = Vec::with_capacity(preferred.len());
    for program in preferred {
        if !programs.contains(&program) {
            programs.push(program);
        }
    }
    programs
}
