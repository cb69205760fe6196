use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::battery::{ChargeSource, UeventKeys};
use crate::error::{ChargeError, Result};
use crate::kv::{capacity_percent, get_u64, parse_uevent, KeyValueMap};
use crate::types::ChargeReading;

const ENERGY_NOW: &str = "POWER_SUPPLY_ENERGY_NOW";
const ENERGY_FULL: &str = "POWER_SUPPLY_ENERGY_FULL";
const CAPACITY: &str = "POWER_SUPPLY_CAPACITY";
const DISCHARGING: &str = "Discharging";

/// Reads `<battery_path>/uevent`.
pub struct UeventBattery {
    battery_path: PathBuf,
    keys: UeventKeys,
}

impl UeventBattery {
    pub fn new(battery_path: PathBuf, keys: UeventKeys) -> Self {
        Self { battery_path, keys }
    }

    fn percentage(&self, uevent: &KeyValueMap) -> Result<u32> {
        let pairs = [
            (self.keys.current.as_str(), self.keys.full.as_str()),
            (ENERGY_NOW, ENERGY_FULL),
        ];

        for (current_key, full_key) in pairs {
            if uevent.contains_key(current_key) && uevent.contains_key(full_key) {
                debug!(current_key, full_key, "computing percentage from capacity");
                let current = get_u64(uevent, current_key)?;
                let full = get_u64(uevent, full_key)?;
                return capacity_percent(current, full, full_key);
            }
        }

        if uevent.contains_key(CAPACITY) {
            debug!("falling back to kernel reported capacity");
            let capacity = get_u64(uevent, CAPACITY)?;
            return Ok(u32::try_from(capacity).unwrap_or(u32::MAX));
        }

        Err(ChargeError::missing_key(self.keys.current.as_str()))
    }
}

impl ChargeSource for UeventBattery {
    fn name(&self) -> &'static str {
        "uevent"
    }

    fn read(&self) -> Result<ChargeReading> {
        let path = self.battery_path.join("uevent");
        let content = fs::read_to_string(&path).map_err(|source| ChargeError::Io {
            path: path.clone(),
            source,
        })?;
        let uevent = parse_uevent(&content);

        let connected = uevent
            .get(&self.keys.status)
            .map_or(true, |status| status != DISCHARGING);
        let percentage = self.percentage(&uevent)?;

        Ok(ChargeReading {
            connected,
            percentage,
        })
    }
}
