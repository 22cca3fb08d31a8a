//! Opening files and URIs with the desktop shell.
//!
//! A [`Launcher`] first asks the native [`DesktopIntegration`] adapter to
//! perform the action and falls back to spawning the platform's opener
//! commands. Failures never escape as errors; every entry point reports a
//! plain `bool`.

mod adapters;
mod command;
pub mod config;
pub mod factory;
mod launcher;
mod spawn;

use std::path::Path;

use url::Url;

pub use adapters::unsupported::UnsupportedDesktop;
pub use adapters::{DesktopIntegration, LaunchAction, LaunchTarget, SharedDesktop};
pub use command::{fallback_commands, LaunchCommand, TARGET_PLACEHOLDER};
pub use config::{load_launcher_config, write_launcher_config, LauncherConfig};
pub use factory::default_desktop;
pub use launcher::{LaunchPolicy, Launcher};
pub use spawn::{ProcessSpawner, ProcessState, SharedSpawner, Spawner};

/// Browses `uri` with the live system launcher.
pub fn browse(uri: &Url) -> bool {
    Launcher::system().browse(uri)
}

/// Opens `path` with the live system launcher.
pub fn open(path: &Path) -> bool {
    Launcher::system().open(path)
}

/// Edits `path` with the live system launcher.
pub fn edit(path: &Path) -> bool {
    Launcher::system().edit(path)
}
