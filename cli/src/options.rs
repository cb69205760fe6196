//! Options resolved from the command line, the config file and defaults.

use battline_platform::{SourceConfig, UeventKeys};
use thiserror::Error;

use crate::cli::Cli;
use crate::config::UserConfig;

pub const DEFAULT_UPPER_THRESHOLD: u32 = 75;
pub const DEFAULT_LOWER_THRESHOLD: u32 = 25;
pub const DEFAULT_ICON_THRESHOLDS: [u32; 4] = [80, 60, 40, 20];

/// Invalid option combinations. These end the run quietly with status 0.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("expected 4 icon thresholds, got {0}")]
    IconThresholdCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Tmux,
    Zsh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOptions {
    /// Show the lightning glyph while on external power.
    pub emoji: bool,
    pub nerd_fonts: bool,
    pub ascii: bool,
    /// Cut-points for the five Nerd Font glyphs, highest first.
    pub thresholds: [u32; 4],
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            emoji: true,
            nerd_fonts: false,
            ascii: false,
            thresholds: DEFAULT_ICON_THRESHOLDS,
        }
    }
}

/// User chosen tier colors; `None` means the format default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub good: Option<String>,
    pub middle: Option<String>,
    pub warn: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub lower: u32,
    pub upper: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_THRESHOLD,
            upper: DEFAULT_UPPER_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub format: OutputFormat,
    pub icons: IconOptions,
    pub colors: ColorOverrides,
    pub thresholds: Thresholds,
    pub source: SourceConfig,
}

impl Options {
    /// Flags win over the config file, which wins over the defaults.
    pub fn resolve(cli: &Cli, config: &UserConfig) -> Result<Self, UsageError> {
        let format = if cli.tmux {
            OutputFormat::Tmux
        } else if cli.zsh {
            OutputFormat::Zsh
        } else {
            OutputFormat::Plain
        };

        let icon_list = cli
            .icon_thresholds
            .as_deref()
            .unwrap_or(&config.thresholds.icons);
        let thresholds: [u32; 4] = icon_list
            .try_into()
            .map_err(|_| UsageError::IconThresholdCount(icon_list.len()))?;

        let pick = |flag: &Option<String>, configured: &Option<String>| {
            flag.clone().or_else(|| configured.clone())
        };

        Ok(Self {
            format,
            icons: IconOptions {
                emoji: !cli.no_emoji,
                nerd_fonts: cli.nerd_fonts,
                ascii: cli.ascii,
                thresholds,
            },
            colors: ColorOverrides {
                good: pick(&cli.good_color, &config.colors.good),
                middle: pick(&cli.middle_color, &config.colors.middle),
                warn: pick(&cli.warn_color, &config.colors.warn),
            },
            thresholds: Thresholds {
                lower: cli.lower_threshold.unwrap_or(config.thresholds.lower),
                upper: cli.upper_threshold.unwrap_or(config.thresholds.upper),
            },
            source: SourceConfig {
                battery_path: cli
                    .battery_path
                    .clone()
                    .unwrap_or_else(|| config.battery_path.clone()),
                use_pmset: cli.pmset || config.use_pmset,
                uevent_keys: UeventKeys::from(&config.uevent),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::parse_from;
    use pretty_assertions::assert_eq;

    fn resolve(args: &[&str], config: &UserConfig) -> Result<Options, UsageError> {
        let mut argv = vec!["battline"];
        argv.extend_from_slice(args);
        Options::resolve(&parse_from(argv).unwrap(), config)
    }

    #[test]
    fn test_defaults() {
        let options = resolve(&[], &UserConfig::default()).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(
            options.source.battery_path,
            PathBuf::from("/sys/class/power_supply/BAT0")
        );
    }

    #[test]
    fn test_tmux_wins_over_zsh() {
        let options = resolve(&["-z", "-t"], &UserConfig::default()).unwrap();
        assert_eq!(options.format, OutputFormat::Tmux);

        let options = resolve(&["-z"], &UserConfig::default()).unwrap();
        assert_eq!(options.format, OutputFormat::Zsh);
    }

    #[test]
    fn test_icon_threshold_count() {
        assert_eq!(
            resolve(&["-i", "80,60,40"], &UserConfig::default()),
            Err(UsageError::IconThresholdCount(3))
        );
        assert_eq!(
            resolve(&["-i", "90,80,60,40,20"], &UserConfig::default()),
            Err(UsageError::IconThresholdCount(5))
        );

        let options = resolve(&["-i", "90,70,50,10"], &UserConfig::default()).unwrap();
        assert_eq!(options.icons.thresholds, [90, 70, 50, 10]);
    }

    #[test]
    fn test_config_icon_threshold_count() {
        let mut config = UserConfig::default();
        config.thresholds.icons = vec![50];
        assert_eq!(
            resolve(&[], &config),
            Err(UsageError::IconThresholdCount(1))
        );

        // A valid flag replaces the broken configured list.
        assert!(resolve(&["-i", "80,60,40,20"], &config).is_ok());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = UserConfig::default();
        config.thresholds.upper = 90;
        config.thresholds.lower = 30;
        config.colors.good = Some("cyan".to_string());
        config.colors.warn = Some("magenta".to_string());
        config.battery_path = PathBuf::from("/sys/class/power_supply/BAT1");

        let options = resolve(&["-u", "70", "-w", "red", "-b", "/tmp/BAT2"], &config).unwrap();
        assert_eq!(
            options.thresholds,
            Thresholds {
                lower: 30,
                upper: 70
            }
        );
        assert_eq!(options.colors.good.as_deref(), Some("cyan"));
        assert_eq!(options.colors.middle, None);
        assert_eq!(options.colors.warn.as_deref(), Some("red"));
        assert_eq!(options.source.battery_path, PathBuf::from("/tmp/BAT2"));
    }

    #[test]
    fn test_icon_flags() {
        let options = resolve(&["-e", "-n", "-a", "-p"], &UserConfig::default()).unwrap();
        assert!(!options.icons.emoji);
        assert!(options.icons.nerd_fonts);
        assert!(options.icons.ascii);
        assert!(options.source.use_pmset);
    }
}
