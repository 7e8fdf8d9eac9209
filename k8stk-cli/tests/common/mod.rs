//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated temporary directory, a command builder for the
//! `k8stk` binary and kubeconfig fixtures.

#![allow(dead_code)]

use assert_cmd::Command;
use k8stk::kubeconfig::codec;
use k8stk::Kubeconfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base document with one context `dev` -> cluster `c1`, user `u1`.
pub const DEV_CONFIG: &str = r"apiVersion: v1
kind: Config
current-context: dev
clusters:
- name: c1
  cluster:
    server: https://10.0.0.1:6443
users:
- name: u1
  user:
    client-certificate-data: QkFTRS1DRVJU
    client-key-data: QkFTRS1LRVk=
contexts:
- name: dev
  context:
    cluster: c1
    user: u1
";

/// Same names as [`DEV_CONFIG`] but a different endpoint.
pub const DEV_CONFIG_OTHER_ENDPOINT: &str = r"apiVersion: v1
kind: Config
current-context: dev
clusters:
- name: c1
  cluster:
    server: https://192.168.1.50:6443
users:
- name: u1
  user:
    client-certificate-data: T1RIRVItQ0VSVA==
    client-key-data: T1RIRVItS0VZ
contexts:
- name: dev
  context:
    cluster: c1
    user: u1
";

/// Two contexts `a` and `b` with their own cluster and user, `a` current.
pub const TWO_CONTEXTS: &str = r"apiVersion: v1
kind: Config
current-context: a
clusters:
- name: cluster-a
  cluster:
    server: https://a.example.com
- name: cluster-b
  cluster:
    server: https://b.example.com
users:
- name: user-a
  user:
    client-certificate-data: QQ==
- name: user-b
  user:
    client-certificate-data: Qg==
contexts:
- name: a
  context:
    cluster: cluster-a
    user: user-a
- name: b
  context:
    cluster: cluster-b
    user: user-b
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Get a command builder for the k8stk binary.
    pub fn command(&self) -> Command {
        Command::cargo_bin("k8stk").expect("Failed to find k8stk binary")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `contents` to a file named `name` and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test config");
        path
    }

    /// Read a document the CLI wrote.
    pub fn read_config(&self, path: &Path) -> Kubeconfig {
        let text = std::fs::read_to_string(path).expect("Failed to read output");
        codec::parse(&text).expect("Output is not a valid kubeconfig")
    }
}

/// Parse a document from captured stdout.
pub fn parse_stdout(stdout: &[u8]) -> Kubeconfig {
    let text = String::from_utf8(stdout.to_vec()).expect("Invalid UTF-8 in output");
    codec::parse(&text).expect("Output is not a valid kubeconfig")
}
