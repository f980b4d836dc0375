//! End-to-end integration tests demonstrating the test harness.
//!
//! These tests walk a full note lifecycle across separate processes, which
//! is where persistence between sessions shows up.

mod common;

use common::harness::{TestEnv, note};
use predicates::prelude::*;

#[test]
fn test_notes_survive_between_invocations() {
    let env = TestEnv::new();

    env.cmd().add("Persisted", "across runs").assert().success();

    env.cmd()
        .ls()
        .assert()
        .success()
        .stdout(predicate::str::contains("Persisted"))
        .stdout(predicate::str::contains("across runs"));
}

#[test]
fn test_full_lifecycle() {
    let env = TestEnv::new();

    env.cmd().add("One", "1").assert().success();
    env.cmd().add("Two", "2").assert().success();
    env.cmd().add("Three", "3").assert().success();

    let ids: Vec<i64> = env.notes().iter().map(|n| n.id().as_i64()).collect();
    assert_eq!(ids.len(), 3);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 3, "ids must be unique");

    env.cmd()
        .args(["edit", &ids[1].to_string(), "--title", "Deux"])
        .assert()
        .success();
    env.cmd().rm(ids[0]).assert().success();

    let titles: Vec<String> = env.notes().iter().map(|n| n.title().to_string()).collect();
    assert_eq!(titles, vec!["Deux", "Three"]);

    env.cmd().clear().args(["-y"]).assert().success();
    assert!(env.notes().is_empty());
}

#[test]
fn test_load_drops_invalid_records() {
    let env = TestEnv::new();
    env.write_raw(
        r#"[{"id":1,"title":"Keep","content":"k"},
            {"id":1,"title":"Dup","content":"d"},
            {"id":2,"title":"","content":"empty title"}]"#,
    );

    let output: serde_json::Value = env.cmd().ls().format_json().output_json();

    assert_eq!(output["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(output["data"][0]["title"], "Keep");
}

#[test]
fn test_null_slot_loads_empty_and_add_works() {
    let env = TestEnv::new();
    env.write_raw("null");

    env.cmd().add("Fresh", "start").assert().success();

    assert_eq!(env.notes().len(), 1);
}

#[test]
fn test_seeded_order_is_display_order() {
    let env = TestEnv::new();
    env.seed(&[note(30, "C", "c"), note(10, "A", "a"), note(20, "B", "b")]);

    let out = env.cmd().ls().output_success();
    let c = out.find("[30] C").unwrap();
    let a = out.find("[10] A").unwrap();
    let b = out.find("[20] B").unwrap();
    assert!(c < a && a < b);
}
