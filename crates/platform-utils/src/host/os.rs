use serde::{Deserialize, Serialize};

/// Closed set of platform variants the helpers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl OsFamily {
    /// Classifies an `os.name` value. Matching is a case-insensitive prefix test.
    pub fn from_os_name(os_name: &str) -> Self {
        let name = os_name.to_lowercase();
        if name.starts_with("linux") {
            OsFamily::Linux
        } else if name.starts_with("windows") {
            OsFamily::Windows
        } else if name.starts_with("mac") || name.starts_with("darwin") {
            OsFamily::MacOs
        } else {
            OsFamily::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::MacOs => "macos",
            OsFamily::Windows => "windows",
            OsFamily::Other => "other",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
