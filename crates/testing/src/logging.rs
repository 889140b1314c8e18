// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test logging setup
//!
//! Installs a `tracing` subscriber writing through the test harness so log
//! output is captured per test. The filter is read from `RUST_LOG` and falls
//! back to `warn`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for a test; repeated calls are no-ops
pub fn init() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
		.with_test_writer()
		.try_init();
}
