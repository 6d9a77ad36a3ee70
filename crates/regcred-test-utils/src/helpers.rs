//! [`FakeHelperDir`]: a temporary directory of scripted credential helpers.
//!
//! Helpers are `/bin/sh` scripts, so tests using them only run on unix.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Naming convention shared by all credential helper programs
const HELPER_PREFIX: &str = "docker-credential-";

/// A temporary directory holding fake helper programs.
///
/// # Example
///
/// ```rust,no_run
/// use regcred_test_utils::FakeHelperDir;
///
/// let helpers = FakeHelperDir::new();
/// helpers.add_success("fake", "alice", "s3cr3t");
/// let search_path = helpers.search_path();
/// ```
pub struct FakeHelperDir {
    temp_dir: TempDir,
}

impl Default for FakeHelperDir {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHelperDir {
    /// Create an empty helper directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the directory holding the helpers.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A search path containing only this directory.
    pub fn search_path(&self) -> OsString {
        self.path().as_os_str().to_os_string()
    }

    /// This directory followed by the current process `PATH`.
    pub fn search_path_with_system(&self) -> OsString {
        let mut dirs = vec![self.path().to_path_buf()];
        if let Some(path) = std::env::var_os("PATH") {
            dirs.extend(std::env::split_paths(&path));
        }
        std::env::join_paths(dirs).unwrap()
    }

    /// Write an executable script named exactly `name` with the given body.
    pub fn add_program(&self, name: &str, body: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        make_executable(&path);
        path
    }

    /// Write `docker-credential-<name>` with the given script body.
    pub fn add_helper(&self, name: &str, body: &str) -> PathBuf {
        self.add_program(&format!("{HELPER_PREFIX}{name}"), body)
    }

    /// A helper that prints the given credentials and exits 0.
    pub fn add_success(&self, name: &str, username: &str, secret: &str) -> PathBuf {
        self.add_helper(
            name,
            &format!("printf '%s' '{{\"Username\":\"{username}\",\"Secret\":\"{secret}\"}}'"),
        )
    }

    /// A helper that prints `stdout` and exits with `code`.
    pub fn add_failure(&self, name: &str, stdout: &str, code: i32) -> PathBuf {
        self.add_helper(name, &format!("printf '%s\\n' '{stdout}'\nexit {code}"))
    }

    /// A helper that records its arguments and stdin next to itself, then
    /// prints fixed credentials.
    ///
    /// Recorded files are `<name>.args` and `<name>.stdin`.
    pub fn add_recording(&self, name: &str) -> PathBuf {
        let args = self.path().join(format!("{name}.args"));
        let stdin = self.path().join(format!("{name}.stdin"));
        self.add_helper(
            name,
            &format!(
                "printf '%s' \"$*\" > '{}'\ncat > '{}'\nprintf '%s' '{{\"Username\":\"recorded\",\"Secret\":\"value\"}}'",
                args.display(),
                stdin.display()
            ),
        )
    }

    /// Read what a recording helper saw on stdin.
    pub fn recorded_stdin(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(format!("{name}.stdin"))).unwrap()
    }

    /// Read the arguments a recording helper was invoked with.
    pub fn recorded_args(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(format!("{name}.args"))).unwrap()
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
