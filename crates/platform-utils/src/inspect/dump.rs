use std::io::{self, Write};

use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::UtilsResult;
use crate::host::HostEnv;
use crate::settings::Settings;

pub const SYSPROP_PREFIX: &str = "SYSPROP:";
pub const ENV_PREFIX: &str = "ENV:";

/// All properties and variables as `PREFIX: key=value`, sorted.
pub fn env_dump_lines(host: &HostEnv) -> Vec<String> {
    let mut lines: Vec<String> = host
        .properties()
        .map(|(key, value)| format!("{SYSPROP_PREFIX} {key}={value}"))
        .chain(
            host.vars()
                .map(|(key, value)| format!("{ENV_PREFIX} {key}={value}")),
        )
        .collect();
    lines.sort();
    lines
}

pub fn dump_env<W: Write>(host: &HostEnv, out: &mut W) -> UtilsResult<()> {
    for line in env_dump_lines(host) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn dump_env_to_stdout(host: &HostEnv) -> UtilsResult<()> {
    dump_env(host, &mut io::stdout().lock())
}

pub fn dump_env_to_stderr(host: &HostEnv) -> UtilsResult<()> {
    dump_env(host, &mut io::stderr().lock())
}

/// Logs every dump line at `level`. Nothing is collected when `level` is
/// more verbose than `gate`. Returns the number of lines emitted.
pub fn dump_env_to_log(host: &HostEnv, level: Level, gate: LevelFilter) -> usize {
    if level > gate {
        return 0;
    }
    let lines = env_dump_lines(host);
    for line in &lines {
        emit(level, line);
    }
    lines.len()
}

pub fn dump_env_info(host: &HostEnv) -> usize {
    dump_env_to_log(host, Level::INFO, Settings::from_host(host).dump_level)
}

pub fn dump_env_debug(host: &HostEnv) -> usize {
    dump_env_to_log(host, Level::DEBUG, Settings::from_host(host).dump_level)
}

pub fn dump_env_trace(host: &HostEnv) -> usize {
    dump_env_to_log(host, Level::TRACE, Settings::from_host(host).dump_level)
}

fn emit(level: Level, line: &str) {
    match level {
        Level::ERROR => tracing::error!("{line}"),
        Level::WARN => tracing::warn!("{line}"),
        Level::INFO => tracing::info!("{line}"),
        Level::DEBUG => tracing::debug!("{line}"),
        _ => tracing::trace!("{line}"),
    }
}
