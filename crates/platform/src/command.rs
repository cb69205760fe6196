//! Narrow seam over external command execution.

use std::io;
use std::process::Command;

use crate::error::{ChargeError, Result};

/// Captured result of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    /// Exit code, or `None` when the process was killed by a signal.
    pub status: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an external program to completion.
///
/// A spawn failure of kind [`io::ErrorKind::NotFound`] means the program is
/// not installed.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Runs real processes, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommand;

impl CommandRunner for SystemCommand {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: output.status.code(),
        })
    }
}

/// Run `program` and require a successful exit.
pub fn run_checked(runner: &dyn CommandRunner, program: &str, args: &[&str]) -> Result<String> {
    let output = runner
        .run(program, args)
        .map_err(|source| ChargeError::Command {
            program: program.to_string(),
            source,
        })?;

    if !output.success() {
        return Err(ChargeError::CommandFailed {
            program: program.to_string(),
            status: output.status,
        });
    }

    Ok(output.stdout)
}


#[cfg(test)]
mod tests {
    use super::fake::FakeCommand;
    use super::*;

    #[test]
    fn test_run_checked() {
        let runner = FakeCommand::default()
            .with("ok", "fine\n", 0)
            .with("bad", "", 3);

        assert_eq!(run_checked(&runner, "ok", &[]).unwrap(), "fine\n");
        assert!(matches!(
            run_checked(&runner, "bad", &[]),
            Err(ChargeError::CommandFailed {
                status: Some(3),
                ..
            })
        ));
        assert!(matches!(
            run_checked(&runner, "missing", &[]),
            Err(ChargeError::Command { .. })
        ));
    }

    #[test]
    fn test_system_command_not_found() {
        let err = SystemCommand
            .run("battline-definitely-not-installed", &[])
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
