//! Battery charge sources for battline.
//!
//! This crate reads the external power state and charge percentage from the
//! data source of each supported OS, behind a single [`ChargeSource`] trait.
//! External tools are invoked through [`CommandRunner`] so callers can swap
//! in fakes.
//!
//! # Example
//!
//! ```ignore
//! use battline_platform::{select_source, Platform, SourceConfig, SystemCommand};
//!
//! let source = select_source(&Platform::current(), &SourceConfig::default(), &SystemCommand)?;
//! let reading = source.read()?;
//! println!("{}% connected={}", reading.percentage, reading.connected);
//! ```

mod battery;
mod command;
mod error;
pub mod kv;
mod types;

pub mod linux;
pub mod macos;

pub use battery::{select_source, ChargeSource, SourceConfig, UeventKeys, DEFAULT_BATTERY_PATH};
pub use command::{run_checked, CommandOutput, CommandRunner, SystemCommand};
pub use error::{ChargeError, Result};
pub use types::{ChargeReading, Platform};
