pub mod error;
pub mod settings;
pub mod host;

pub mod app_name;
pub mod desktop;
pub mod inspect;
pub mod project;

pub use crate::desktop::{browse, edit, open, Launcher};
pub use crate::error::{UtilsError, UtilsResult};
pub use crate::host::{HostEnv, OsFamily};
pub use crate::inspect::AppDirs;
pub use crate::settings::Settings;
