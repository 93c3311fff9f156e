// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::Duration;

#[test]
fn capability_set_parses_the_raw_string() {
    let resource = Resource::builder().capabilities("python linux docker").build();
    assert_eq!(resource.capability_set().len(), 3);
}

#[yare::parameterized(
    well_within_timeout = { 5, 600, false },
    exactly_at_timeout = { 600, 600, false },
    past_timeout = { 601, 600, true },
)]
fn is_stale_compares_elapsed_to_timeout(elapsed_secs: i64, timeout_secs: i64, expected: bool) {
    let last_seen = Utc::now() - Duration::seconds(elapsed_secs);
    let resource = Resource::builder().last_seen(last_seen).build();
    assert_eq!(resource.is_stale(Utc::now(), Duration::seconds(timeout_secs)), expected);
}

#[test]
fn deleted_resource_can_still_be_constructed_unavailable() {
    let resource = Resource::builder().available(false).deleted(true).build();
    assert!(resource.deleted);
    assert!(!resource.available);
}
