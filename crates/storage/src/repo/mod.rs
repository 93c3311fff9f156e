// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-entity repositories (spec §4.1): `get`/`create`/`update`/`delete`/
//! `get_all`/`filter`, plus the specialized queries named in §4.1-§4.4.

mod audit;
mod credential;
mod process;
mod resource;
mod session;
mod trigger;
mod workitem;
mod workqueue;

pub use audit::AuditLogRepository;
pub use credential::CredentialRepository;
pub use process::ProcessRepository;
pub use resource::ResourceRepository;
pub use session::SessionRepository;
pub use trigger::TriggerRepository;
pub use workitem::WorkItemRepository;
pub use workqueue::WorkqueueRepository;

/// Generates a repository struct with the common CRUD surface (spec §4.1)
/// for an entity that carries a `deleted: bool` flag (soft-delete).
///
/// `$field` names the `StoreInner` map; `$kind` is the taxonomy label used
/// in `CoreError` (e.g. `"Process"`). An optional trailing closure runs
/// against the entity right after `deleted` is flipped, for entities that
/// need extra bookkeeping on delete (e.g. `Resource` also clearing
/// `available`, spec §3's `deleted ⇒ ¬available` invariant).
macro_rules! soft_delete_repository {
    ($repo:ident, $entity:ty, $id:ty, $field:ident, $kind:literal) => {
        soft_delete_repository!($repo, $entity, $id, $field, $kind, |_e: &mut $entity| {});
    };
    ($repo:ident, $entity:ty, $id:ty, $field:ident, $kind:literal, $on_delete:expr) => {
        pub struct $repo {
            store: crate::store::Store,
        }

        impl $repo {
            pub fn new(store: crate::store::Store) -> Self {
                Self { store }
            }

            pub fn get(&self, id: &$id) -> ctrlplane_core::CoreResult<$entity> {
                self.store
                    .inner
                    .read()
                    .$field
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ctrlplane_core::CoreError::not_found($kind, id.to_string()))
            }

            pub fn create(&self, entity: $entity) -> $entity {
                self.store.inner.write().$field.insert(entity.id, entity.clone());
                entity
            }

            /// Fetch `id`, apply `mutate`, and persist the result. Returns
            /// `NotFound` if the entity is missing.
            pub fn update(
                &self,
                id: &$id,
                mutate: impl FnOnce(&mut $entity),
            ) -> ctrlplane_core::CoreResult<$entity> {
                let mut guard = self.store.inner.write();
                let entity = guard
                    .$field
                    .get_mut(id)
                    .ok_or_else(|| ctrlplane_core::CoreError::not_found($kind, id.to_string()))?;
                mutate(entity);
                Ok(entity.clone())
            }

            /// Soft-delete: flips `deleted = true` in place, then runs the
            /// entity-specific `on_delete` hook (a no-op unless overridden).
            pub fn delete(&self, id: &$id) -> ctrlplane_core::CoreResult<()> {
                let mut guard = self.store.inner.write();
                let entity = guard
                    .$field
                    .get_mut(id)
                    .ok_or_else(|| ctrlplane_core::CoreError::not_found($kind, id.to_string()))?;
                entity.deleted = true;
                ($on_delete)(entity);
                Ok(())
            }

            pub fn get_all(&self, include_deleted: bool) -> Vec<$entity> {
                self.store
                    .inner
                    .read()
                    .$field
                    .values()
                    .filter(|e| include_deleted || !e.deleted)
                    .cloned()
                    .collect()
            }

            pub fn filter(&self, predicate: impl Fn(&$entity) -> bool) -> Vec<$entity> {
                self.store.inner.read().$field.values().filter(|e| predicate(e)).cloned().collect()
            }
        }
    };
}

pub(crate) use soft_delete_repository;
