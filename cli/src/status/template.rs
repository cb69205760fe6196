use crate::options::{ColorOverrides, OutputFormat};
use crate::status::tier::Tier;

/// Literal pieces of one output format plus its default tier colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub prefix: &'static str,
    pub mid: &'static str,
    pub suffix: &'static str,
    pub trailer: &'static str,
    pub good: &'static str,
    pub middle: &'static str,
    pub warn: &'static str,
}

const TMUX: Template = Template {
    prefix: "#[fg=",
    mid: "][",
    suffix: "%] ",
    trailer: "#[default]",
    good: "green",
    middle: "yellow",
    warn: "red",
};

const ZSH: Template = Template {
    prefix: "%B%F{",
    mid: "}[",
    suffix: "%%] ",
    trailer: "",
    good: "64",
    middle: "136",
    warn: "160",
};

const PLAIN: Template = Template {
    prefix: "\x1b[",
    mid: "m[",
    suffix: "%] ",
    trailer: " \x1b[0m\n",
    good: "1;32",
    middle: "1;33",
    warn: "0;31",
};

impl Template {
    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Tmux => TMUX,
            OutputFormat::Zsh => ZSH,
            OutputFormat::Plain => PLAIN,
        }
    }

    /// The user's color for `tier` if set, else this format's default.
    pub fn color<'a>(&self, tier: Tier, overrides: &'a ColorOverrides) -> &'a str {
        let (configured, default) = match tier {
            Tier::Good => (&overrides.good, self.good),
            Tier::Middle => (&overrides.middle, self.middle),
            Tier::Warn => (&overrides.warn, self.warn),
        };
        configured.as_deref().unwrap_or(default)
    }

    pub fn render(&self, color: &str, percentage: u32, glyph: &str) -> String {
        format!(
            "{}{color}{}{percentage}{}{glyph}{}",
            self.prefix, self.mid, self.suffix, self.trailer
        )
    }
}
