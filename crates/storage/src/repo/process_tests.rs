use super::*;
use crate::store::Store;

#[test]
fn create_then_get_round_trips() {
    let repo = ProcessRepository::new(Store::new());
    let process = repo.create(Process::builder().name("nightly-report").build());
    assert_eq!(repo.get(&process.id).unwrap().name, "nightly-report");
}

#[test]
fn get_missing_id_is_not_found() {
    let repo = ProcessRepository::new(Store::new());
    let err = repo.get(&ProcessId::new()).unwrap_err();
    assert!(matches!(err, ctrlplane_core::CoreError::NotFound { .. }));
}

#[test]
fn delete_soft_deletes_and_is_excluded_from_default_get_all() {
    let repo = ProcessRepository::new(Store::new());
    let process = repo.create(Process::builder().build());
    repo.delete(&process.id).unwrap();
    assert!(repo.get_all(false).is_empty());
    assert_eq!(repo.get_all(true).len(), 1);
}

#[test]
fn update_mutates_the_stored_entity() {
    let repo = ProcessRepository::new(Store::new());
    let process = repo.create(Process::builder().name("old").build());
    let updated = repo.update(&process.id, |p| p.name = "new".to_string()).unwrap();
    assert_eq!(updated.name, "new");
    assert_eq!(repo.get(&process.id).unwrap().name, "new");
}

#[test]
fn filter_applies_an_arbitrary_predicate() {
    let repo = ProcessRepository::new(Store::new());
    repo.create(Process::builder().name("a").build());
    repo.create(Process::builder().name("b").build());
    let matches = repo.filter(|p| p.name == "a");
    assert_eq!(matches.len(), 1);
}
