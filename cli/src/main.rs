mod cli;
mod config;
mod logging;
mod options;
mod status;

use std::io::{self, Write};

use battline_platform::{select_source, CommandRunner, Platform, SystemCommand};
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, warn};

use config::{LogLevel, UserConfig};
use logging::LogMode;
use options::Options;

fn main() -> Result<()> {
    color_eyre::install()?;

    let Some(cli) = cli::parse() else {
        return Ok(());
    };

    let (user_config, config_error) = match UserConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (UserConfig::default(), Some(err)),
    };

    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_name);
    let _guard = logging::init(
        user_config.log_level,
        LogMode::select(user_config.log_file, log_level_override),
        log_level_override,
    );

    if let Some(err) = config_error {
        warn!(error = %err, "ignoring config file");
    }

    let options = match Options::resolve(&cli, &user_config) {
        Ok(options) => options,
        Err(err) => {
            debug!(error = %err, "usage error, exiting quietly");
            return Ok(());
        }
    };

    run(
        &options,
        &Platform::current(),
        &SystemCommand,
        &mut io::stdout().lock(),
    )
}

/// Write one fragment to `out`. Nothing is written when any step fails.
fn run(
    options: &Options,
    platform: &Platform,
    runner: &dyn CommandRunner,
    out: &mut impl Write,
) -> Result<()> {
    let source =
        select_source(platform, &options.source, runner).wrap_err("no battery charge source")?;

    let fragment = status::render_status(options, source.as_ref(), runner)?;

    out.write_all(fragment.as_bytes())?;
    out.flush()?;
    Ok(())
}
