use tracing::debug;

use crate::battery::ChargeSource;
use crate::command::{run_checked, CommandRunner};
use crate::error::{ChargeError, Result};
use crate::kv::{capacity_percent, get_u64, parse_ioreg};
use crate::types::ChargeReading;

const EXTERNAL_CONNECTED: &str = "ExternalConnected";
const CURRENT_CAPACITY: &str = "CurrentCapacity";
const MAX_CAPACITY: &str = "MaxCapacity";

/// Reads `ioreg -r -n AppleSmartBattery`.
pub struct IoregBattery<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> IoregBattery<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl ChargeSource for IoregBattery<'_> {
    fn name(&self) -> &'static str {
        "ioreg"
    }

    fn read(&self) -> Result<ChargeReading> {
        let stdout = run_checked(self.runner, "ioreg", &["-r", "-n", "AppleSmartBattery"])?;
        parse_ioreg_output(&stdout)
    }
}

fn parse_ioreg_output(output: &str) -> Result<ChargeReading> {
    let info = parse_ioreg(output);
    debug!(entries = info.len(), "parsed ioreg output");

    let connected = info
        .get(EXTERNAL_CONNECTED)
        .map_or(true, |value| value != "No");

    let current = get_u64(&info, CURRENT_CAPACITY)?;
    let max = get_u64(&info, MAX_CAPACITY)?;
    let percentage = capacity_percent(current, max, MAX_CAPACITY)?;

    Ok(ChargeReading {
        connected,
        percentage,
    })
}

/// Reads `pmset -g batt`, which reports the rounded percentage macOS shows.
pub struct PmsetBattery<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PmsetBattery<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }
}

impl ChargeSource for PmsetBattery<'_> {
    fn name(&self) -> &'static str {
        "pmset"
    }

    fn read(&self) -> Result<ChargeReading> {
        let stdout = run_checked(self.runner, "pmset", &["-g", "batt"])?;
        parse_pmset_output(&stdout)
    }
}

fn parse_pmset_output(output: &str) -> Result<ChargeReading> {
    let connected = output.contains("AC Power");
    let percentage = extract_percentage(output).ok_or(ChargeError::NoPercentage)?;

    Ok(ChargeReading {
        connected,
        percentage,
    })
}

/// First run of digits directly followed by `%`.
fn extract_percentage(output: &str) -> Option<u32> {
    output.match_indices('%').find_map(|(idx, _)| {
        let prefix = &output[..idx];
        let start = prefix.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let digits = &prefix[start..];
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::fake::FakeCommand;

    const IOREG_ON_BATTERY: &str = r#"+-o AppleSmartBattery  <class AppleSmartBattery>
    {
      "TimeRemaining" = 312
      "ExternalConnected" = No
      "CurrentCapacity" = 4104
      "IsCharging" = No
      "MaxCapacity" = 5472
      "DesignCapacity" = 6075
    }
"#;

    const PMSET_ON_AC: &str = "Now drawing from 'AC Power'\n \
        -InternalBattery-0 (id=4653155)\t87%; charging; 0:42 remaining present: true\n";

    const PMSET_ON_BATTERY: &str = "Now drawing from 'Battery Power'\n \
        -InternalBattery-0 (id=4653155)\t7%; discharging; 0:21 remaining present: true\n";

    #[test]
    fn test_ioreg_on_battery() {
        let runner = FakeCommand::default().with("ioreg", IOREG_ON_BATTERY, 0);
        let reading = IoregBattery::new(&runner).read().unwrap();

        // 100 * 4104 / 5472 = 75
        assert_eq!(
            reading,
            ChargeReading {
                connected: false,
                percentage: 75,
            }
        );
    }

    #[test]
    fn test_ioreg_connected_unless_no() {
        let output = IOREG_ON_BATTERY.replace("\"ExternalConnected\" = No", "\"ExternalConnected\" = Yes");
        assert!(parse_ioreg_output(&output).unwrap().connected);

        let output = "\"CurrentCapacity\" = 50\n\"MaxCapacity\" = 200\n";
        let reading = parse_ioreg_output(output).unwrap();
        assert!(reading.connected);
        assert_eq!(reading.percentage, 25);
    }

    #[test]
    fn test_ioreg_missing_capacity() {
        let output = "\"ExternalConnected\" = Yes\n\"CurrentCapacity\" = 50\n";
        match parse_ioreg_output(output) {
            Err(ChargeError::MissingKey { key }) => assert_eq!(key, MAX_CAPACITY),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_ioreg_command_failure() {
        let runner = FakeCommand::default().with("ioreg", "", 1);
        assert!(matches!(
            IoregBattery::new(&runner).read(),
            Err(ChargeError::CommandFailed { .. })
        ));
    }

    #[test]
    fn test_pmset_readings() {
        let runner = FakeCommand::default().with("pmset", PMSET_ON_AC, 0);
        assert_eq!(
            PmsetBattery::new(&runner).read().unwrap(),
            ChargeReading {
                connected: true,
                percentage: 87,
            }
        );

        let runner = FakeCommand::default().with("pmset", PMSET_ON_BATTERY, 0);
        assert_eq!(
            PmsetBattery::new(&runner).read().unwrap(),
            ChargeReading {
                connected: false,
                percentage: 7,
            }
        );
    }

    #[test]
    fn test_pmset_without_percentage() {
        let runner = FakeCommand::default().with("pmset", "No batteries available\n", 0);
        assert!(matches!(
            PmsetBattery::new(&runner).read(),
            Err(ChargeError::NoPercentage)
        ));
    }

    #[test]
    fn test_extract_percentage() {
        assert_eq!(extract_percentage("100%; charged"), Some(100));
        assert_eq!(extract_percentage("odd % then 42%"), Some(42));
        assert_eq!(extract_percentage("nothing here"), None);
    }
}
