//! End-to-end credential resolution against real helper processes.
//!
//! Helpers are shell scripts written by `FakeHelperDir`, located through a
//! `SystemRuntime` whose search path points at the fixture directory.

#![cfg(unix)]

use pretty_assertions::assert_eq;
use regcred_config::DockerConfig;
use regcred_core::{Error, Resolver};
use regcred_helper::{Credentials, HelperError, HelperInvoker, SystemRuntime};
use regcred_test_utils::{FakeHelperDir, write_config};
use tempfile::TempDir;

fn invoker(helpers: &FakeHelperDir) -> HelperInvoker<SystemRuntime> {
    HelperInvoker::with_runtime(SystemRuntime::with_search_path(
        helpers.search_path_with_system(),
    ))
}

fn resolver(helpers: &FakeHelperDir) -> Resolver<SystemRuntime> {
    Resolver::with_runtime(SystemRuntime::with_search_path(
        helpers.search_path_with_system(),
    ))
}

// ============================================================================
// Helper protocol
// ============================================================================

#[test]
fn test_helper_success() {
    let helpers = FakeHelperDir::new();
    helpers.add_success("fake", "alice", "s3cr3t");

    let creds = invoker(&helpers).get_credentials("fake", "ghcr.io").unwrap();
    assert_eq!(creds, Credentials::new("alice", "s3cr3t"));
}

#[test]
fn test_helper_receives_get_and_exact_hostname() {
    let helpers = FakeHelperDir::new();
    helpers.add_recording("rec");

    let creds = invoker(&helpers)
        .get_credentials("rec", "registry.example.com:5000")
        .unwrap();
    assert_eq!(creds, Credentials::new("recorded", "value"));
    assert_eq!(helpers.recorded_args("rec"), "get");
    assert_eq!(helpers.recorded_stdin("rec"), "registry.example.com:5000");
}

#[test]
fn test_helper_not_found_sentinel() {
    let helpers = FakeHelperDir::new();
    helpers.add_failure("fake", "credentials not found in native keychain", 1);

    let err = invoker(&helpers)
        .get_credentials("fake", "ghcr.io")
        .unwrap_err();
    assert!(matches!(err, HelperError::CredentialsNotFound));
    assert_eq!(err.to_string(), "credentials not found in native keychain");
}

#[test]
fn test_helper_missing_server_url_sentinel() {
    let helpers = FakeHelperDir::new();
    helpers.add_failure("fake", "no credentials server URL", 1);

    let err = invoker(&helpers).get_credentials("fake", "").unwrap_err();
    assert_eq!(err.to_string(), "no credentials server URL");
}

#[test]
fn test_helper_unexpected_failure() {
    let helpers = FakeHelperDir::new();
    helpers.add_helper("fake", "echo 'keyring locked' >&2\nexit 4");

    let err = invoker(&helpers)
        .get_credentials("fake", "ghcr.io")
        .unwrap_err();
    match err {
        HelperError::CommandFailed { code, stderr, .. } => {
            assert_eq!(code, 4);
            assert_eq!(stderr, "keyring locked");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_helper_malformed_output() {
    let helpers = FakeHelperDir::new();
    helpers.add_helper("fake", "echo 'this is not json'");

    let err = invoker(&helpers)
        .get_credentials("fake", "ghcr.io")
        .unwrap_err();
    assert!(matches!(err, HelperError::Decode(_)));
}

#[test]
fn test_helper_null_output() {
    let helpers = FakeHelperDir::new();
    helpers.add_helper("fake", "echo null");

    let creds = invoker(&helpers).get_credentials("fake", "ghcr.io").unwrap();
    assert_eq!(creds, Credentials::empty());
}

#[test]
fn test_inline_entry_with_undecodable_auth() {
    let helpers = FakeHelperDir::new();
    helpers.add_recording("secretservice");
    let config =
        DockerConfig::from_json(r#"{ "auths": { "quay.io": { "auth": "%%%" } } }"#).unwrap();

    let creds = resolver(&helpers)
        .resolve_with_config(&config, "quay.io")
        .unwrap();
    assert_eq!(creds, Credentials::empty());
    assert!(!helpers.path().join("secretservice.stdin").exists());
}

#[test]
fn test_helper_absent_from_search_path() {
    let helpers = FakeHelperDir::new();

    let creds = invoker(&helpers)
        .get_credentials("absent", "ghcr.io")
        .unwrap();
    assert_eq!(creds, Credentials::empty());
}

// ============================================================================
// Resolution precedence
// ============================================================================

#[test]
fn test_per_host_helper_bypasses_store() {
    let helpers = FakeHelperDir::new();
    helpers.add_success("perhost", "alice", "s3cr3t");
    helpers.add_recording("store");
    let config = DockerConfig::from_json(
        r#"{
            "credHelpers": { "ghcr.io": "perhost" },
            "credsStore": "store",
            "auths": { "ghcr.io": { "username": "inline", "password": "pw" } }
        }"#,
    )
    .unwrap();

    let creds = resolver(&helpers)
        .resolve_with_config(&config, "ghcr.io")
        .unwrap();
    assert_eq!(creds, Credentials::new("alice", "s3cr3t"));
    assert!(!helpers.path().join("store.stdin").exists());
}

#[test]
fn test_store_used_when_no_per_host_helper() {
    let helpers = FakeHelperDir::new();
    helpers.add_recording("store");
    let config = DockerConfig::from_json(
        r#"{ "credHelpers": { "ghcr.io": "perhost" }, "credsStore": "store" }"#,
    )
    .unwrap();

    let creds = resolver(&helpers)
        .resolve_with_config(&config, "quay.io")
        .unwrap();
    assert_eq!(creds, Credentials::new("recorded", "value"));
    assert_eq!(helpers.recorded_stdin("store"), "quay.io");
}

#[test]
fn test_resolve_from_config_file() {
    let helpers = FakeHelperDir::new();
    let config_dir = TempDir::new().unwrap();
    let path = write_config(
        config_dir.path(),
        r#"{ "auths": { "quay.io": { "username": "bob", "password": "hunter2" } } }"#,
    );

    let creds = resolver(&helpers)
        .with_config_path(path)
        .resolve("quay.io")
        .unwrap();
    assert_eq!(creds, Credentials::new("bob", "hunter2"));
}

#[test]
fn test_broken_config_file_is_fatal() {
    let helpers = FakeHelperDir::new();
    let config_dir = TempDir::new().unwrap();
    let path = write_config(config_dir.path(), "not json");

    let err = resolver(&helpers)
        .with_config_path(path)
        .resolve("quay.io")
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_config_uses_pass_when_available() {
    let helpers = FakeHelperDir::new();
    helpers.add_program("pass", "exit 0");
    helpers.add_success("pass", "from-pass", "pw");
    let config_dir = TempDir::new().unwrap();

    let creds = resolver(&helpers)
        .with_config_path(config_dir.path().join("config.json"))
        .resolve("ghcr.io")
        .unwrap();
    assert_eq!(creds, Credentials::new("from-pass", "pw"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_config_falls_back_to_secretservice() {
    let helpers = FakeHelperDir::new();
    helpers.add_success("secretservice", "from-dbus", "pw");
    let config_dir = TempDir::new().unwrap();
    let resolver = Resolver::with_runtime(SystemRuntime::with_search_path(helpers.search_path()))
        .with_config_path(config_dir.path().join("config.json"));

    let creds = resolver.resolve("ghcr.io").unwrap();
    assert_eq!(creds, Credentials::new("from-dbus", "pw"));
}
