// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn requirement_set_parses_the_raw_string() {
    let process = Process::builder().requirements("python linux").build();
    assert_eq!(process.requirement_set().len(), 2);
}

#[test]
fn builder_defaults_to_not_deleted() {
    let process = Process::builder().build();
    assert!(!process.deleted);
}

#[test]
fn each_built_process_gets_a_distinct_id() {
    let a = Process::builder().build();
    let b = Process::builder().build();
    assert_ne!(a.id, b.id);
}
