// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::atomic::{AtomicUsize, Ordering};

use polyfn_function::Input;
use polyfn_type::Value;

/// Argument provider that records how often it was evaluated
#[derive(Debug)]
pub struct CountingInput {
	value: Value,
	calls: AtomicUsize,
}

impl CountingInput {
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
			calls: AtomicUsize::new(0),
		}
	}

	pub fn null() -> Self {
		Self::new(Value::Undefined)
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl Input for CountingInput {
	fn value(&self) -> Value {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.value.clone()
	}
}

/// Argument provider that fails the test when evaluated
#[derive(Debug, Default)]
pub struct UnreachableInput;

impl Input for UnreachableInput {
	fn value(&self) -> Value {
		panic!("argument must not be evaluated")
	}
}
