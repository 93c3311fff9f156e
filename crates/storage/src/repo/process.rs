// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use ctrlplane_core::{Process, ProcessId};

soft_delete_repository!(ProcessRepository, Process, ProcessId, processes, "Process");

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
