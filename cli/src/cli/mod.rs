use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Battery charge fragment for tmux status bars and shell prompts
///
/// Any invalid option exits 0 without output, so a broken prompt
/// configuration never prints garbage.
#[derive(Debug, Default, Parser)]
#[command(name = "battline", version, verbatim_doc_comment)]
pub struct Cli {
    /// Output tmux status bar format
    #[arg(short = 't', long = "tmux")]
    pub tmux: bool,

    /// Output zsh prompt format
    #[arg(short = 'z', long = "zsh")]
    pub zsh: bool,

    /// Don't output the emoji
    #[arg(short = 'e', long = "no-emoji")]
    pub no_emoji: bool,

    /// Always show an ascii bar, even while charging or with Nerd Fonts
    #[arg(short = 'a', long = "ascii")]
    pub ascii: bool,

    /// Battery path [default: /sys/class/power_supply/BAT0]
    #[arg(short = 'b', long = "battery-path", value_name = "PATH")]
    pub battery_path: Option<PathBuf>,

    /// Use pmset (more accurate)
    #[arg(short = 'p', long = "pmset")]
    pub pmset: bool,

    /// Use Nerd Fonts battery icons
    #[arg(short = 'n', long = "nerd-fonts")]
    pub nerd_fonts: bool,

    /// Icon thresholds in percent [default: 80,60,40,20]
    #[arg(
        short = 'i',
        long = "icons",
        value_name = "N,N,N,N",
        value_delimiter = ','
    )]
    pub icon_thresholds: Option<Vec<u32>>,

    /// Good battery level color    (default: 1;32 | tmux: green  | zsh: 64)
    #[arg(short = 'g', long = "good", value_name = "COLOR")]
    pub good_color: Option<String>,

    /// Middle battery level color  (default: 1;33 | tmux: yellow | zsh: 136)
    #[arg(short = 'm', long = "middle", value_name = "COLOR")]
    pub middle_color: Option<String>,

    /// Warn battery level color    (default: 0;31 | tmux: red    | zsh: 160)
    #[arg(short = 'w', long = "warn", value_name = "COLOR")]
    pub warn_color: Option<String>,

    /// Upper threshold in percent [default: 75]
    #[arg(short = 'u', long = "upper", value_name = "PERCENT")]
    pub upper_threshold: Option<u32>,

    /// Lower threshold in percent [default: 25]
    #[arg(short = 'l', long = "lower", value_name = "PERCENT")]
    pub lower_threshold: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Parse the process arguments.
///
/// Returns `None` when the run should end quietly: help and version are
/// printed, any other parse failure is swallowed.
pub fn parse() -> Option<Cli> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
            }
            None
        }
    }
}
