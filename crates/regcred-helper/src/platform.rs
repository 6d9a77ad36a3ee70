//! Platform default credential helper selection

/// Program whose presence selects the `pass` helper on Linux
pub const PASS_PROGRAM: &str = "pass";

/// Operating system families with a known default helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    /// Any platform without a default helper
    Other,
}

impl Platform {
    /// The platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

/// Default helper name for a platform.
///
/// On Linux the `pass` helper is preferred when the `pass` program is
/// available, otherwise the Secret Service helper is used.
pub fn default_helper(platform: Platform, pass_available: bool) -> Option<&'static str> {
    match platform {
        Platform::Linux if pass_available => Some("pass"),
        Platform::Linux => Some("secretservice"),
        Platform::MacOs => Some("osxkeychain"),
        Platform::Windows => Some("wincred"),
        Platform::Other => None,
    }
}
