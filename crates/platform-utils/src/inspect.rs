//! Diagnostics and per-application directories derived from a [`HostEnv`].

mod app_dirs;
mod dump;

pub use app_dirs::{AppDirs, LOCAL_APP_DATA_VAR, USER_PROFILE_VAR};
pub use dump::{
    dump_env, dump_env_debug, dump_env_info, dump_env_to_log, dump_env_to_stderr,
    dump_env_to_stdout, dump_env_trace, env_dump_lines, ENV_PREFIX, SYSPROP_PREFIX,
};

use crate::error::{UtilsError, UtilsResult};
use crate::host::HostEnv;

pub fn is_linux(host: &HostEnv) -> bool {
    host.os_name().to_lowercase().starts_with("linux")
}

pub fn is_windows(host: &HostEnv) -> bool {
    host.os_name().to_lowercase().starts_with("windows")
}

/// Guard for Windows-only operations.
pub fn assert_windows(host: &HostEnv) -> UtilsResult<()> {
    if is_windows(host) {
        Ok(())
    } else {
        Err(UtilsError::UnsupportedPlatform(host.os_name().to_string()))
    }
}

/// Value of `name`, else `fallback`, else an error naming the variable.
pub fn require_var(host: &HostEnv, name: &str, fallback: Option<&str>) -> UtilsResult<String> {
    host.var(name)
        .or(fallback)
        .map(str::to_string)
        .ok_or_else(|| {
            UtilsError::IllegalState(format!(
                "tried to access env var {name}, but it is not set"
            ))
        })
}
