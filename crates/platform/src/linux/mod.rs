//! Linux charge source backed by the power-supply `uevent` file.

mod battery;

pub use battery::UeventBattery;
