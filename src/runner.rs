use std::io;
use std::process::Command;

/// Name of the Copernicus Marine client executable.
pub const TOOL_NAME: &str = "copernicusmarine";

/// Capability to run the external Copernicus Marine client. The downloader
/// and the depth probe only see this trait, so tests can substitute a fake
/// that never spawns a process.
pub trait ToolRunner {
    /// Run the tool with the given arguments, inheriting stdio and blocking
    /// until it exits. Returns true when the exit status is zero.
    fn run(&self, args: &[String]) -> io::Result<bool>;

    /// Run the tool and capture its stdout. A non-zero exit is an error.
    fn capture(&self, args: &[String]) -> io::Result<String>;
}

/// The real client, invoked as a subprocess.
#[derive(Debug, Default)]
pub struct CopernicusCli;

impl ToolRunner for CopernicusCli {
    fn run(&self, args: &[String]) -> io::Result<bool> {
        let status = Command::new(TOOL_NAME).args(args).status()?;
        Ok(status.success())
    }

    fn capture(&self, args: &[String]) -> io::Result<String> {
        let output = Command::new(TOOL_NAME).args(args).output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                TOOL_NAME, output.status
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
