use std::io;

use battline_platform::CommandRunner;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::{debug, info};

use crate::options::IconOptions;

pub const BAR_LENGTH: usize = 10;

const LIGHTNING: &str = "\u{26a1}";
const NERD_GLYPHS: [&str; 5] = ["\u{f240}", "\u{f241}", "\u{f242}", "\u{f243}", "\u{f244}"];
const SPARK: &str = "spark";

/// Pick the glyph for a reading. The ascii bar overrides everything;
/// otherwise the first match wins: lightning on external power, Nerd Font
/// level, spark, ascii bar.
pub fn resolve(
    connected: bool,
    percentage: u32,
    icons: &IconOptions,
    runner: &dyn CommandRunner,
) -> Result<String> {
    if icons.ascii {
        return Ok(ascii_bar(percentage));
    }

    if icons.emoji && connected {
        return Ok(LIGHTNING.to_string());
    }

    if icons.nerd_fonts {
        return Ok(nerd_glyph(percentage, &icons.thresholds).to_string());
    }

    match spark_glyph(runner, percentage)? {
        Some(glyph) => Ok(glyph),
        None => {
            info!("spark not installed, falling back to ascii bar");
            Ok(ascii_bar(percentage))
        }
    }
}

pub fn nerd_glyph(percentage: u32, thresholds: &[u32; 4]) -> &'static str {
    thresholds
        .iter()
        .position(|&threshold| percentage >= threshold)
        .map_or(NERD_GLYPHS[4], |idx| NERD_GLYPHS[idx])
}

/// Bracketed bar of `BAR_LENGTH` cells; the filled count is
/// `BAR_LENGTH * percentage / 100 + 1`, capped at `BAR_LENGTH`.
pub fn ascii_bar(percentage: u32) -> String {
    let scaled = usize::try_from(percentage).unwrap_or(usize::MAX);
    let filled = (scaled.saturating_mul(BAR_LENGTH) / 100 + 1).min(BAR_LENGTH);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_LENGTH - filled))
}

/// Middle character of `spark 0 <percentage> 100`, or `None` when spark is
/// not installed.
fn spark_glyph(runner: &dyn CommandRunner, percentage: u32) -> Result<Option<String>> {
    let value = percentage.to_string();
    let output = match runner.run(SPARK, &["0", &value, "100"]) {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err).wrap_err("failed to run spark"),
    };

    if !output.success() {
        return Err(match output.status {
            Some(code) => eyre!("spark exited with status {code}"),
            None => eyre!("spark was terminated by a signal"),
        });
    }

    let glyph = output
        .stdout
        .chars()
        .nth(1)
        .ok_or_else(|| eyre!("unexpected spark output: {:?}", output.stdout))?;
    debug!(%glyph, "spark glyph");
    Ok(Some(glyph.to_string()))
}
