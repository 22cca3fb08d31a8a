use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use super::OsFamily;

pub const PROP_OS_NAME: &str = "os.name";
pub const PROP_OS_ARCH: &str = "os.arch";
pub const PROP_OS_FAMILY: &str = "os.family";
pub const PROP_USER_HOME: &str = "user.home";
pub const PROP_USER_DIR: &str = "user.dir";
pub const PROP_USER_DESKTOP: &str = "user.desktop";
pub const PROP_TEMP_DIR: &str = "temp.dir";
pub const PROP_EXE_PATH: &str = "exe.path";
pub const PROP_PATH_SEPARATOR: &str = "path.separator";
pub const PROP_PROJECT_BASEDIR: &str = "project.basedir";

const MANIFEST_DIR_VAR: &str = "CARGO_MANIFEST_DIR";

/// Point-in-time view of the process: derived "system properties" plus the
/// environment variables. All helpers read the environment through this so
/// that any platform can be simulated.
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    properties: BTreeMap<String, String>,
    vars: BTreeMap<String, String>,
}

impl HostEnv {
    /// Captures the live process state.
    pub fn capture() -> Self {
        let vars: BTreeMap<String, String> = env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();

        let mut properties = BTreeMap::new();
        properties.insert(PROP_OS_NAME.to_string(), env::consts::OS.to_string());
        properties.insert(PROP_OS_ARCH.to_string(), env::consts::ARCH.to_string());
        properties.insert(PROP_OS_FAMILY.to_string(), env::consts::FAMILY.to_string());
        properties.insert(
            PROP_PATH_SEPARATOR.to_string(),
            std::path::MAIN_SEPARATOR.to_string(),
        );
        properties.insert(
            PROP_TEMP_DIR.to_string(),
            env::temp_dir().to_string_lossy().into_owned(),
        );
        if let Some(home) = dirs::home_dir() {
            properties.insert(
                PROP_USER_HOME.to_string(),
                home.to_string_lossy().into_owned(),
            );
        }
        if let Some(desktop) = dirs::desktop_dir() {
            properties.insert(
                PROP_USER_DESKTOP.to_string(),
                desktop.to_string_lossy().into_owned(),
            );
        }
        if let Ok(cwd) = env::current_dir() {
            properties.insert(PROP_USER_DIR.to_string(), cwd.to_string_lossy().into_owned());
        }
        if let Ok(exe) = env::current_exe() {
            properties.insert(PROP_EXE_PATH.to_string(), exe.to_string_lossy().into_owned());
        }
        if let Some(basedir) = vars.get(MANIFEST_DIR_VAR) {
            properties.insert(PROP_PROJECT_BASEDIR.to_string(), basedir.clone());
        }

        Self { properties, vars }
    }

    /// Builds a snapshot from explicit maps.
    pub fn from_parts<P, V, K1, V1, K2, V2>(properties: P, vars: V) -> Self
    where
        P: IntoIterator<Item = (K1, V1)>,
        V: IntoIterator<Item = (K2, V2)>,
        K1: Into<String>,
        V1: Into<String>,
        K2: Into<String>,
        V2: Into<String>,
    {
        Self {
            properties: properties
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Variable value, treating an empty value as unset.
    pub fn non_empty_var(&self, key: &str) -> Option<&str> {
        self.var(key).filter(|value| !value.is_empty())
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn os_name(&self) -> &str {
        self.property(PROP_OS_NAME).unwrap_or_default()
    }

    pub fn os_family(&self) -> OsFamily {
        OsFamily::from_os_name(self.os_name())
    }

    pub fn home_dir(&self) -> Option<PathBuf> {
        self.property(PROP_USER_HOME).map(PathBuf::from)
    }
}
