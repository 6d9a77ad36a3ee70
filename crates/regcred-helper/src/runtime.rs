//! Process capabilities used by the helper invoker
//!
//! [`HelperRuntime`] is the seam between the invocation logic and the
//! operating system: locating programs on the search path, running them,
//! and reporting the platform. [`SystemRuntime`] is the real implementation.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::platform::Platform;

/// Captured result of a finished subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Locate-on-path and execute-and-capture capabilities
pub trait HelperRuntime {
    /// Find `program` on the search path
    fn look_path(&self, program: &str) -> Option<PathBuf>;

    /// Run `program` with `args`, writing `stdin` as its entire input, and
    /// wait for it to exit.
    fn run(&self, program: &Path, args: &[&str], stdin: &[u8]) -> std::io::Result<CommandOutput>;

    /// Platform used to pick the default helper
    fn platform(&self) -> Platform {
        Platform::current()
    }
}

impl<T: HelperRuntime + ?Sized> HelperRuntime for &T {
    fn look_path(&self, program: &str) -> Option<PathBuf> {
        (**self).look_path(program)
    }

    fn run(&self, program: &Path, args: &[&str], stdin: &[u8]) -> std::io::Result<CommandOutput> {
        (**self).run(program, args, stdin)
    }

    fn platform(&self) -> Platform {
        (**self).platform()
    }
}

/// Runtime backed by the real process environment
#[derive(Debug, Clone, Default)]
pub struct SystemRuntime {
    /// Search path override; `PATH` is read on every lookup when `None`
    search_path: Option<OsString>,
}

impl SystemRuntime {
    /// Runtime searching the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime searching the given path list instead of `PATH`
    ///
    /// Only program lookup is affected; spawned helpers inherit the process
    /// environment unchanged.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn search_path(&self) -> OsString {
        self.search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"))
            .unwrap_or_default()
    }
}

impl HelperRuntime for SystemRuntime {
    fn look_path(&self, program: &str) -> Option<PathBuf> {
        let extensions: Vec<String> = if cfg!(windows) {
            std::env::var("PATHEXT")
                .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
                .split(';')
                .map(|s| s.to_ascii_lowercase())
                .collect()
        } else {
            vec![String::new()]
        };

        for dir in std::env::split_paths(&self.search_path()) {
            for ext in &extensions {
                let candidate = if ext.is_empty() {
                    dir.join(program)
                } else {
                    dir.join(format!("{}{}", program, ext))
                };
                if is_executable(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    fn run(&self, program: &Path, args: &[&str], stdin: &[u8]) -> std::io::Result<CommandOutput> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut pipe) = child.stdin.take() {
            // A helper may exit without reading its input.
            match pipe.write_all(stdin) {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e),
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
