//! macOS charge sources backed by `ioreg` and `pmset`.

mod battery;

pub use battery::{IoregBattery, PmsetBattery};
