// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability / requirement token sets.
//!
//! Both a [`Process`](crate::process::Process)'s `requirements` and a
//! [`Resource`](crate::resource::Resource)'s `capabilities` are opaque
//! strings split into unordered token sets (spec §4.5). The matcher itself
//! (best-fit selection) lives in `ctrlplane-engine`; this module only owns
//! the parsing and the subset test both that matcher and repository-level
//! validation need.

use std::collections::BTreeSet;

/// Parsed capability/requirement token set.
///
/// Tokens are split on commas or runs of whitespace. Per spec §9 this is a
/// preserved latent bug: tokens are **not** lower-cased, matching the
/// original system's observed behavior (`"Python"` and `"python"` are
/// distinct tokens).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilitySet(BTreeSet<String>);

impl CapabilitySet {
    /// Parse a raw string into a token set, splitting on commas or
    /// whitespace runs. Empty or whitespace-only input yields an empty set.
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();
        Self(tokens)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True iff every token in `self` is present in `other` — i.e. `other`
    /// is capable of satisfying `self`'s requirements.
    pub fn is_subset_of(&self, other: &CapabilitySet) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
