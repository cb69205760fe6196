//! Shared types for charge sources.

use std::fmt;

/// Operating system family the charge source is chosen for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    /// Any other OS, carrying its `std::env::consts::OS` name.
    Unsupported(String),
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Returns a human-readable label for the platform.
    pub fn label(&self) -> &str {
        match self {
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Unsupported(os) => os,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One charge reading: external power state and charge percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChargeReading {
    /// Whether external power is connected.
    pub connected: bool,
    /// Charge level, normally 0-100.
    pub percentage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_os() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Unsupported("freebsd".to_string())
        );
    }

    #[test]
    fn test_platform_labels() {
        assert_eq!(Platform::MacOs.label(), "macOS");
        assert_eq!(Platform::Linux.to_string(), "Linux");
        assert_eq!(Platform::Unsupported("haiku".into()).label(), "haiku");
    }
}
