// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use polyfn_type::Value;

/// Object with text keys, entries in the given insertion order
pub fn object<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Value {
	Value::object(entries)
}

pub fn ints(values: impl IntoIterator<Item = i32>) -> Value {
	Value::list(values.into_iter().map(Value::int4))
}
