// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability matcher (spec §4.5): stateless best-fit resource selection.
//!
//! Grounded on `original_source/backend/app/scheduler/utils.py`'s
//! `find_best_resource`: filter candidates to those whose capability set is
//! a superset of the requirements, then pick the smallest such set (least
//! over-provisioned). Ties resolve to whichever candidate appears first in
//! the slice passed in — stable for a given query, per spec §9.

use ctrlplane_core::{CapabilitySet, Resource};

/// Select the most specific compatible resource for `requirements` among
/// `candidates`, or `None` if no candidate is compatible (including when
/// `requirements` or `candidates` is empty — spec §4.5).
pub fn find_best_resource(requirements: &CapabilitySet, candidates: &[Resource]) -> Option<Resource> {
    if requirements.is_empty() {
        return None;
    }
    candidates
        .iter()
        .filter(|r| requirements.is_subset_of(&r.capability_set()))
        .min_by_key(|r| r.capability_set().len())
        .cloned()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
