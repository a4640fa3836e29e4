// Transfer executor: builds the argument list for the external scp binary
// and runs it as a blocking child process. Arguments are always passed as a
// list, never through a shell.

use std::io;
use std::process::Command;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::settings::Settings;

pub const SCP_PROGRAM: &str = "scp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Send,
    Receive,
}

/// One copy operation, with both endpoints already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub source: String,
    pub destination: String,
    pub recursive: bool,
}

impl TransferRequest {
    /// The local path is used verbatim; the remote path is turned into a
    /// `user@ip:path` endpoint.
    pub fn new(
        settings: &Settings,
        direction: Direction,
        local_path: &str,
        remote_path: &str,
        recursive: bool,
    ) -> Self {
        let remote = settings.remote_endpoint(remote_path);
        let (source, destination) = match direction {
            Direction::Send => (local_path.to_string(), remote),
            Direction::Receive => (remote, local_path.to_string()),
        };
        TransferRequest {
            source,
            destination,
            recursive,
        }
    }

    /// `[-r] -P <port> <source> <destination>`
    pub fn args(&self, settings: &Settings) -> Vec<String> {
        let mut args = Vec::with_capacity(5);
        if self.recursive {
            args.push("-r".to_string());
        }
        args.push("-P".to_string());
        args.push(settings.ssh_port.clone());
        args.push(self.source.clone());
        args.push(self.destination.clone());
        args
    }
}

/// What the executor needs back from a finished child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

/// Process boundary. The real implementation spawns the binary; tests
/// substitute a canned result.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<RunOutput>;
}

/// Runs the program with `std::process::Command`, capturing stdout and
/// stderr. Blocks until the child exits; there is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        let output = Command::new(program).args(args).output()?;
        Ok(RunOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

pub struct Executor<R> {
    program: String,
    runner: R,
}

impl Executor<SystemRunner> {
    pub fn scp() -> Self {
        Executor::new(SCP_PROGRAM, SystemRunner)
    }
}

impl<R: CommandRunner> Executor<R> {
    pub fn new(program: impl Into<String>, runner: R) -> Self {
        Executor {
            program: program.into(),
            runner,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The command as it is shown to the user before running.
    pub fn command_line(&self, args: &[String]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the external tool with `args`. A zero exit is success; anything
    /// else carries the captured stderr.
    pub fn execute(&mut self, args: &[String]) -> Result<()> {
        info!(program = %self.program, ?args, "starting transfer");
        let output = self
            .runner
            .run(&self.program, args)
            .map_err(|source| {
                warn!(program = %self.program, error = %source, "failed to launch");
                Error::Launch {
                    program: self.program.clone(),
                    source,
                }
            })?;
        if output.success {
            info!("transfer finished");
            return Ok(());
        }
        warn!(code = ?output.code, "transfer failed");
        Err(Error::TransferFailed {
            code: output.code,
            stderr: output.stderr,
        })
    }
}
