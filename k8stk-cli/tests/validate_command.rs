//! Integration tests for the `validate` command.

mod common;

use common::{TestEnv, TWO_CONTEXTS};
use predicates::prelude::*;

#[test]
fn test_validate_valid_document() {
    let env = TestEnv::new();
    let config = env.write_config("config", TWO_CONTEXTS);

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_dangling_reference() {
    let env = TestEnv::new();
    let broken = TWO_CONTEXTS.replace("cluster: cluster-b", "cluster: nowhere");
    let config = env.write_config("config", &broken);

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Validation error:"))
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn test_validate_duplicate_names() {
    let env = TestEnv::new();
    let duplicated = TWO_CONTEXTS.replace("- name: b\n", "- name: a\n");
    let config = env.write_config("config", &duplicated);

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("contexts[1].name"));
}
