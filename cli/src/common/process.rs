//! # pkgkit Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Two ways of running external programs:
//!
//! - **Batch** ([`run_shell_command`]): the command string goes to
//!   `sh -c`, stdin is `/dev/null`, and stdout and stderr share one pipe so
//!   the captured bytes are the *combined output* in the order the child
//!   wrote them. On failure the captured bytes travel with the error
//!   ([`UtilError::output`]) so compiler diagnostics are never lost.
//! - **Interactive** ([`run_interactive_command`]): the program is started
//!   directly (no shell, no `PATH` lookup) on the caller's terminal, with a
//!   [`SignalGuard`] held until it exits so that Ctrl-C reaches the child
//!   without killing this process.
//!
//! Both calls block until the child exits; there is no timeout.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pkgkit::common::process;
//!
//! # fn main() -> pkgkit::core::error::Result<()> {
//! let listing = process::run_shell_command("ls -1 bin")?;
//! print!("{}", String::from_utf8_lossy(&listing));
//!
//! let status = process::run_interactive_command(&["/usr/bin/gdb", "bin/app.elf"])?;
//! println!("debugger exited with {}", status);
//! # Ok(())
//! # }
//! ```
//!
use crate::common::system::signals::SignalGuard;
use crate::core::error::{Result, UtilError};
use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Runs `cmd` with `sh -c` and returns its combined stdout and stderr.
///
/// # Arguments
///
/// * `cmd` - A shell command line; quoting and redirection are up to `sh`.
///
/// # Returns
///
/// * `Result<Vec<u8>>` - Everything the command wrote to either stream, in
///   write order.
///
/// # Errors
///
/// Returns an error if the shell cannot be started, the output cannot be
/// collected, or the command exits unsuccessfully. Whatever output was
/// captured is available through [`UtilError::output`].
pub fn run_shell_command(cmd: &str) -> Result<Vec<u8>> {
    debug!("{}", cmd);

    // One pipe for both streams keeps their interleaving intact.
    let (mut reader, writer) = io::pipe()?;
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer)
        .spawn()
        .map_err(|e| {
            UtilError::with_source(format!("Failed to start `sh -c {}`: {}", cmd, e), e)
        })?;

    // The parent's copies of the write end are gone, so this reads to EOF.
    let mut output = Vec::new();
    let collected = reader.read_to_end(&mut output);
    let waited = child.wait();
    debug!("o={}", String::from_utf8_lossy(&output));

    if let Err(e) = collected {
        let message = format!("Failed to read output of `{}`: {}", cmd, e);
        return Err(UtilError::with_source(message, e).with_output(output));
    }
    match waited {
        Ok(status) if status.success() => Ok(output),
        Ok(status) => Err(UtilError::new(status.to_string()).with_output(output)),
        Err(e) => {
            let message = format!("Failed to wait for `{}`: {}", cmd, e);
            Err(UtilError::with_source(message, e).with_output(output))
        }
    }
}

/// Runs `argv[0]` with `argv[1..]` attached to the current terminal.
///
/// `argv[0]` is executed as a path: a bare name refers to a file in the
/// current directory, not to something on `PATH`. The child also sees
/// `argv[0]` as its own program name. `SIGINT` and `SIGTERM` are intercepted
/// in this process until the child has exited or failed to start.
///
/// A child that exits with a non-zero status is not an error; its status is
/// returned for the caller to judge.
///
/// # Arguments
///
/// * `argv` - Program path followed by its arguments.
///
/// # Returns
///
/// * `Result<ExitStatus>` - How the child exited.
///
/// # Errors
///
/// Returns an error if `argv` is empty, the program cannot be started, or
/// waiting for it fails.
pub fn run_interactive_command<S: AsRef<OsStr>>(argv: &[S]) -> Result<ExitStatus> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| UtilError::new("Interactive command requires a program to run"))?;
    let program = program.as_ref();
    debug!("{}", program.to_string_lossy());

    // Held until return, on every path.
    let _signals = SignalGuard::acquire()?;

    let mut command = Command::new(direct_path(program));
    command.args(args);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.arg0(program);
    }

    let mut child = command.spawn().map_err(|e| {
        let message = format!("Failed to start {}: {}", program.to_string_lossy(), e);
        UtilError::with_source(message, e)
    })?;
    let status = child.wait().map_err(|e| {
        let message = format!("Failed to wait for {}: {}", program.to_string_lossy(), e);
        UtilError::with_source(message, e)
    })?;
    debug!("{} exited with {}", program.to_string_lossy(), status);
    Ok(status)
}

/// Keeps `Command` from searching `PATH` for a bare program name.
fn direct_path(program: &OsStr) -> PathBuf {
    let path = Path::new(program);
    if path.is_absolute() || path.components().count() > 1 {
        path.to_path_buf()
    } else {
        Path::new(".").join(path)
    }
}

// --- Unit Tests ---
#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::common::system::signals::test_serial;

    #[test]
    fn test_shell_command_success() {
        let output = run_shell_command("echo hi").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "hi\n");
    }

    #[test]
    fn test_shell_command_combines_streams_in_order() {
        let output = run_shell_command("echo out; echo err 1>&2; echo again").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "out\nerr\nagain\n");
    }

    #[test]
    fn test_shell_command_failure_keeps_output() {
        let err = run_shell_command("echo partial; exit 1").unwrap_err();
        assert!(err.to_string().contains('1'));
        assert_eq!(err.output(), b"partial\n");
    }

    #[test]
    fn test_shell_command_exit_without_output() {
        let err = run_shell_command("exit 1").unwrap_err();
        assert!(err.output().is_empty());
    }

    #[test]
    fn test_shell_command_stdin_is_empty() {
        let output = run_shell_command("cat; echo done").unwrap();
        assert_eq!(output, b"done\n");
    }

    #[test]
    fn test_interactive_command_returns_exit_status() {
        let _serial = test_serial();
        let status = run_interactive_command(&["/bin/sh", "-c", "exit 3"]).unwrap();
        assert_eq!(status.code(), Some(3));
        let status = run_interactive_command(&["/bin/sh", "-c", "true"]).unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_interactive_command_does_not_search_path() {
        let _serial = test_serial();
        // `sh` is on PATH but not in the current directory.
        let err = run_interactive_command(&["sh", "-c", "true"]).unwrap_err();
        assert!(err.to_string().contains("Failed to start sh"));
    }

    /// Current disposition of `signum`, read by swapping in the default and back.
    fn disposition(signum: libc::c_int) -> libc::sighandler_t {
        // SAFETY: the previous handler is reinstalled immediately.
        unsafe {
            let current = libc::signal(signum, libc::SIG_DFL);
            libc::signal(signum, current);
            current
        }
    }

    #[test]
    fn test_interactive_command_restores_signal_dispositions() {
        let _serial = test_serial();
        let before = (disposition(libc::SIGINT), disposition(libc::SIGTERM));

        // Spawn failure.
        assert!(run_interactive_command(&["./definitely-missing"]).is_err());
        assert_eq!((disposition(libc::SIGINT), disposition(libc::SIGTERM)), before);

        // Normal exit.
        run_interactive_command(&["/bin/sh", "-c", "exit 0"]).unwrap();
        assert_eq!((disposition(libc::SIGINT), disposition(libc::SIGTERM)), before);
    }

    #[test]
    fn test_interactive_command_requires_program() {
        let empty: [&str; 0] = [];
        assert!(run_interactive_command(&empty).is_err());
    }

    #[test]
    fn test_direct_path() {
        assert_eq!(direct_path(OsStr::new("gdb")), PathBuf::from("./gdb"));
        assert_eq!(direct_path(OsStr::new("bin/gdb")), PathBuf::from("bin/gdb"));
        assert_eq!(direct_path(OsStr::new("/usr/bin/gdb")), PathBuf::from("/usr/bin/gdb"));
    }
}
