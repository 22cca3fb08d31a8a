use std::path::PathBuf;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::desktop::LaunchPolicy;
use crate::host::HostEnv;

pub const DUMP_LEVEL_VAR: &str = "PLATFORM_UTILS_DUMP_LEVEL";
pub const LAUNCH_POLICY_VAR: &str = "PLATFORM_UTILS_LAUNCH_POLICY";
pub const LAUNCHER_CONFIG_VAR: &str = "PLATFORM_UTILS_LAUNCHER_CONFIG";

/// Environment-driven knobs for the helpers.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Most verbose level at which environment dumps are collected.
    pub dump_level: LevelFilter,
    pub launch_policy: LaunchPolicy,
    pub launcher_config: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_host(&HostEnv::capture())
    }

    pub fn from_host(host: &HostEnv) -> Self {
        let dump_level = host
            .non_empty_var(DUMP_LEVEL_VAR)
            .and_then(|value| LevelFilter::from_str(value.trim()).ok())
            .unwrap_or_else(default_dump_level);
        let launch_policy = host
            .non_empty_var(LAUNCH_POLICY_VAR)
            .and_then(|value| match value.parse::<LaunchPolicy>() {
                Ok(policy) => Some(policy),
                Err(error) => {
                    tracing::warn!("ignoring {LAUNCH_POLICY_VAR}: {error}");
                    None
                }
            })
            .unwrap_or_default();
        let launcher_config = host.non_empty_var(LAUNCHER_CONFIG_VAR).map(PathBuf::from);

        Self {
            dump_level,
            launch_policy,
            launcher_config,
        }
    }
}

/// Most verbose level any installed backend accepts: a `tracing` subscriber
/// or, through the `log` bridge, a `log` logger.
pub fn default_dump_level() -> LevelFilter {
    LevelFilter::current().max(level_filter_from_log(log::max_level()))
}

fn level_filter_from_log(filter: log::LevelFilter) -> LevelFilter {
    match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}
