// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for the `stackup` binary.

pub mod plan;
pub mod provision;

pub use plan::{build_plan, run_plan, Plan};
pub use provision::run_provision;

/// Every attempt succeeded / command completed.
pub const EXIT_SUCCESS: i32 = 0;
/// The run completed but at least one create attempt failed.
pub const EXIT_FAILURE: i32 = 1;
/// Configuration could not be loaded or is invalid.
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// The cluster client could not be constructed.
pub const EXIT_CLIENT_ERROR: i32 = 3;
