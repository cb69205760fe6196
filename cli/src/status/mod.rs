//! Classify a charge reading and render it as a status-line fragment.

mod icon;
mod template;
mod tier;

use battline_platform::{ChargeReading, ChargeSource, CommandRunner};
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;

use crate::options::Options;

pub use tier::Tier;

/// One run's view of the battery, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryStatus {
    pub connected: bool,
    pub percentage: u32,
    pub tier: Tier,
}

impl BatteryStatus {
    pub fn classify(reading: ChargeReading, options: &Options) -> Self {
        let tier = Tier::classify(
            reading.percentage,
            options.thresholds.lower,
            options.thresholds.upper,
        );
        Self {
            connected: reading.connected,
            percentage: reading.percentage,
            tier,
        }
    }

    pub fn render(&self, options: &Options, runner: &dyn CommandRunner) -> Result<String> {
        let glyph = icon::resolve(self.connected, self.percentage, &options.icons, runner)?;
        let template = template::Template::for_format(options.format);
        let color = template.color(self.tier, &options.colors);
        Ok(template.render(color, self.percentage, &glyph))
    }
}

/// Read, classify and render. Nothing is printed here.
pub fn render_status(
    options: &Options,
    source: &dyn ChargeSource,
    runner: &dyn CommandRunner,
) -> Result<String> {
    let reading = source
        .read()
        .wrap_err_with(|| format!("failed to read battery charge via {}", source.name()))?;
    let status = BatteryStatus::classify(reading, options);
    debug!(
        connected = status.connected,
        percentage = status.percentage,
        tier = %status.tier,
        "battery status"
    );
    status.render(options, runner)
}
