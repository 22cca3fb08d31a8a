use std::sync::Arc;

use super::adapters::SharedDesktop;

pub fn default_desktop() -> SharedDesktop {
    #[cfg(target_os = "macos")]
    {
        Arc::new(super::adapters::macos::MacosDesktop::new())
    }

    #[cfg(target_os = "windows")]
    {
        Arc::new(super::adapters::windows::WindowsDesktop::new())
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        Arc::new(super::adapters::unsupported::UnsupportedDesktop::new())
    }
}
