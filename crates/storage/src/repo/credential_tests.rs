use super::*;
use crate::store::Store;
use ctrlplane_core::Credential;

#[test]
fn find_by_name_matches_exactly() {
    let repo = CredentialRepository::new(Store::new());
    repo.create(Credential::builder().name("azure-sp").build());
    assert!(repo.find_by_name("azure-sp").is_some());
    assert!(repo.find_by_name("azure").is_none());
}

#[test]
fn soft_deleted_credentials_excluded_from_default_listing() {
    let repo = CredentialRepository::new(Store::new());
    let credential = repo.create(Credential::builder().build());
    repo.delete(&credential.id).unwrap();
    assert!(repo.get_all(false).is_empty());
}
