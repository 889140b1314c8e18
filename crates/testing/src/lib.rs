// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shared helpers for polyfn tests

pub mod input;
pub mod logging;
pub mod value;
