//! Charge source trait and platform dispatch.

use std::path::PathBuf;

use tracing::debug;

use crate::command::CommandRunner;
use crate::error::{ChargeError, Result};
use crate::linux::UeventBattery;
use crate::macos::{IoregBattery, PmsetBattery};
use crate::types::{ChargeReading, Platform};

/// Default sysfs directory of the first battery.
pub const DEFAULT_BATTERY_PATH: &str = "/sys/class/power_supply/BAT0";

/// Trait for platform-specific charge sources.
pub trait ChargeSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Read the current charge. Every failure is fatal to the caller.
    fn read(&self) -> Result<ChargeReading>;
}

/// Keys looked up in a Linux `uevent` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UeventKeys {
    pub status: String,
    pub current: String,
    pub full: String,
}

impl Default for UeventKeys {
    fn default() -> Self {
        Self {
            status: "POWER_SUPPLY_STATUS".to_string(),
            current: "POWER_SUPPLY_CHARGE_NOW".to_string(),
            full: "POWER_SUPPLY_CHARGE_FULL".to_string(),
        }
    }
}

/// Everything a charge source needs from the resolved options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Battery directory containing `uevent` (Linux).
    pub battery_path: PathBuf,
    /// Prefer `pmset` over `ioreg` (macOS).
    pub use_pmset: bool,
    pub uevent_keys: UeventKeys,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            battery_path: PathBuf::from(DEFAULT_BATTERY_PATH),
            use_pmset: false,
            uevent_keys: UeventKeys::default(),
        }
    }
}

/// Pick the charge source for `platform`.
pub fn select_source<'a>(
    platform: &Platform,
    config: &SourceConfig,
    runner: &'a dyn CommandRunner,
) -> Result<Box<dyn ChargeSource + 'a>> {
    let source: Box<dyn ChargeSource + 'a> = match platform {
        Platform::MacOs if config.use_pmset => Box::new(PmsetBattery::new(runner)),
        Platform::MacOs => Box::new(IoregBattery::new(runner)),
        Platform::Linux => Box::new(UeventBattery::new(
            config.battery_path.clone(),
            config.uevent_keys.clone(),
        )),
        Platform::Unsupported(os) => {
            return Err(ChargeError::Unsupported { os: os.clone() });
        }
    };

    debug!(platform = %platform, source = source.name(), "selected charge source");
    Ok(source)
}
