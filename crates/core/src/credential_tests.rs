// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn builder_defaults_to_not_deleted_with_null_data() {
    let credential = Credential::builder().name("azure-sp").build();
    assert_eq!(credential.name, "azure-sp");
    assert!(!credential.deleted);
    assert!(credential.data.is_null());
}

#[test]
fn data_blob_round_trips_through_the_builder() {
    let payload = serde_json::json!({ "client_id": "abc", "client_secret": "xyz" });
    let credential = Credential::builder().data(payload.clone()).build();
    assert_eq!(credential.data, payload);
}

#[test]
fn distinct_credentials_get_distinct_ids() {
    let a = Credential::builder().build();
    let b = Credential::builder().build();
    assert_ne!(a.id, b.id);
}
