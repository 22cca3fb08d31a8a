use super::DesktopIntegration;

/// Adapter for hosts without a native desktop facility. Every action is
/// reported as unsupported so the launcher goes straight to its fallback
/// commands.
#[derive(Debug, Default)]
pub struct UnsupportedDesktop;

impl UnsupportedDesktop {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopIntegration for UnsupportedDesktop {}
