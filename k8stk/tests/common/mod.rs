//! Common test utilities for library integration tests.
//!
//! Provides kubeconfig fixtures and helpers for writing them into
//! temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Base document with one context `dev` -> cluster `c1`, user `u1`.
pub const DEV_CONFIG: &str = r"apiVersion: v1
kind: Config
preferences: {}
current-context: dev
clusters:
- name: c1
  cluster:
    server: https://10.0.0.1:6443
    certificate-authority-data: QkFTRS1DQQ==
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

/// Same names as [`DEV_CONFIG`] but a different endpoint and credentials.
pub const DEV_CONFIG_OTHER_ENDPOINT: &str = r"apiVersion: v1
kind: Config
current-context: dev
clusters:
- name: c1
  cluster:
    server: https://192.168.1.50:6443
    certificate-authority-data: T1RIRVItQ0E=
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

/// A document that shares no names with [`DEV_CONFIG`].
pub const PROD_CONFIG: &str = r"apiVersion: v1
kind: Config
current-context: prod
clusters:
- name: prod-cluster
  cluster:
    server: https://prod.example.com
users:
- name: prod-admin
  user:
    client-certificate-data: UFJPRA==
    client-key-data: UFJPRC1LRVk=
contexts:
- name: prod
  context:
    cluster: prod-cluster
    user: prod-admin
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

/// Write `contents` to `dir/name` and return the path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}
