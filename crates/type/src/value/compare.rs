// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Structural comparison of values.
//!
//! Defines one total order over all values: null against the configured
//! [`NullsOrder`], numbers by exact magnitude regardless of width, text
//! lexicographically, lists element by element (a strict prefix first) and
//! objects by their sorted key sets first and the values of those keys second.
//! Insertion order of objects never influences the result.

use std::{cmp::Ordering, convert::Infallible, marker::PhantomData};

use indexmap::IndexMap;

use super::{NULLS_ORDER, NullsOrder, Value, number::Number};
use crate::error::{Error, diagnostic::compare::incompatible_comparison};

/// Compares two values using [`NULLS_ORDER`].
///
/// Values of unrelated kinds are ranked by kind to keep the order total; use
/// [`try_compare`] where such a comparison indicates a bug.
pub fn compare(l: &Value, r: &Value) -> Ordering {
	compare_with(l, r, NULLS_ORDER)
}

pub fn compare_with(l: &Value, r: &Value, nulls: NullsOrder) -> Ordering {
	let Ok(ordering) = Comparator::<RankByKind>::new(nulls).compare(l, r);
	ordering
}

/// Compares two values, failing with `COMPARE_001` if any nested pair of values has unrelated kinds.
pub fn try_compare(l: &Value, r: &Value) -> crate::Result<Ordering> {
	try_compare_with(l, r, NULLS_ORDER)
}

pub fn try_compare_with(l: &Value, r: &Value, nulls: NullsOrder) -> crate::Result<Ordering> {
	Comparator::<Reject>::new(nulls).compare(l, r)
}

/// What to do with two non-null values of unrelated kinds
trait OnMismatch {
	type Error;

	fn mismatch(l: &Value, r: &Value) -> Result<Ordering, Self::Error>;
}

struct RankByKind;

impl OnMismatch for RankByKind {
	type Error = Infallible;

	fn mismatch(l: &Value, r: &Value) -> Result<Ordering, Self::Error> {
		Ok(l.kind().cmp(&r.kind()))
	}
}

struct Reject;

impl OnMismatch for Reject {
	type Error = Error;

	fn mismatch(l: &Value, r: &Value) -> Result<Ordering, Self::Error> {
		Err(crate::error!(incompatible_comparison(l.kind(), r.kind())))
	}
}

struct Comparator<M> {
	nulls: NullsOrder,
	_mismatch: PhantomData<M>,
}

impl<M: OnMismatch> Comparator<M> {
	fn new(nulls: NullsOrder) -> Self {
		Self {
			nulls,
			_mismatch: PhantomData,
		}
	}

	fn compare(&self, l: &Value, r: &Value) -> Result<Ordering, M::Error> {
		match (l, r) {
			(Value::Undefined, Value::Undefined) => Ok(Ordering::Equal),
			(Value::Undefined, _) => Ok(self.null_before_value()),
			(_, Value::Undefined) => Ok(self.null_before_value().reverse()),
			(Value::Boolean(l), Value::Boolean(r)) => Ok(l.cmp(r)),
			(Value::Utf8(l), Value::Utf8(r)) => Ok(l.cmp(r)),
			(Value::List(l), Value::List(r)) => self.compare_lists(l, r),
			(Value::Object(l), Value::Object(r)) => self.compare_objects(l, r),
			(l, r) => match (Number::of(l), Number::of(r)) {
				(Some(ln), Some(rn)) => Ok(ln.cmp(&rn)),
				_ => M::mismatch(l, r),
			},
		}
	}

	fn null_before_value(&self) -> Ordering {
		match self.nulls {
			NullsOrder::First => Ordering::Less,
			NullsOrder::Last => Ordering::Greater,
		}
	}

	fn compare_lists(&self, l: &[Value], r: &[Value]) -> Result<Ordering, M::Error> {
		for (lv, rv) in l.iter().zip(r) {
			match self.compare(lv, rv)? {
				Ordering::Equal => {}
				ordering => return Ok(ordering),
			}
		}
		Ok(l.len().cmp(&r.len()))
	}

	fn compare_objects(&self, l: &IndexMap<Value, Value>, r: &IndexMap<Value, Value>) -> Result<Ordering, M::Error> {
		let left = self.sorted_entries(l)?;
		let right = self.sorted_entries(r)?;

		// key sets first, position by position over the sorted keys
		for ((lk, _), (rk, _)) in left.iter().zip(&right) {
			match self.compare(lk, rk)? {
				Ordering::Equal => {}
				ordering => return Ok(ordering),
			}
		}
		match left.len().cmp(&right.len()) {
			Ordering::Equal => {}
			ordering => return Ok(ordering),
		}

		// identical key sets, so sorted positions line up
		for ((_, lv), (_, rv)) in left.iter().zip(&right) {
			match self.compare(lv, rv)? {
				Ordering::Equal => {}
				ordering => return Ok(ordering),
			}
		}
		Ok(Ordering::Equal)
	}

	fn sorted_entries<'a>(&self, entries: &'a IndexMap<Value, Value>) -> Result<Vec<(&'a Value, &'a Value)>, M::Error> {
		let mut sorted = entries.iter().collect::<Vec<_>>();
		sorted.sort_by(|(l, _), (r, _)| compare_with(l, r, self.nulls));
		// neighbours of a sorted run are enough to surface keys of unrelated kinds
		for pair in sorted.windows(2) {
			self.compare(pair[0].0, pair[1].0)?;
		}
		Ok(sorted)
	}
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering::{Equal, Greater, Less};

	use super::*;

	fn samples() -> Vec<Value> {
		vec![
			Value::Undefined,
			Value::bool(false),
			Value::bool(true),
			Value::int1(-3i8),
			Value::int4(0),
			Value::uint8(0u64),
			Value::float8(0.5),
			Value::int8(1i64),
			Value::float4(1.0f32),
			Value::uint16(u128::MAX),
			Value::utf8(""),
			Value::utf8("a"),
			Value::utf8("ab"),
			Value::list([]),
			Value::list([Value::int4(1)]),
			Value::list([Value::int4(1), Value::Undefined]),
			Value::list([Value::int4(1), Value::int4(2)]),
			Value::list([Value::int4(2)]),
			Value::object::<&str>([]),
			Value::object([("a", Value::int4(1))]),
			Value::object([("a", Value::int4(2))]),
			Value::object([("a", Value::int4(1)), ("b", Value::int4(2))]),
			Value::object([("b", Value::int4(0))]),
			Value::object([("a", Value::Undefined)]),
		]
	}

	#[test]
	fn test_null_equals_only_null() {
		assert_eq!(compare(&Value::Undefined, &Value::Undefined), Equal);
		for value in samples().iter().filter(|v| !v.is_undefined()) {
			assert_ne!(compare(&Value::Undefined, value), Equal, "{value}");
		}
	}

	#[test]
	fn test_nulls_last_by_default() {
		assert_eq!(NULLS_ORDER, NullsOrder::Last);
		assert_eq!(compare(&Value::Undefined, &Value::int4(1)), Greater);
		assert_eq!(compare(&Value::int4(1), &Value::Undefined), Less);
	}

	#[test]
	fn test_nulls_first() {
		assert_eq!(compare_with(&Value::Undefined, &Value::int4(1), NullsOrder::First), Less);
		assert_eq!(compare_with(&Value::int4(1), &Value::Undefined, NullsOrder::First), Greater);
		let l = Value::list([Value::Undefined]);
		let r = Value::list([Value::int4(1)]);
		assert_eq!(compare_with(&l, &r, NullsOrder::First), Less);
		assert_eq!(compare_with(&l, &r, NullsOrder::Last), Greater);
	}

	#[test]
	fn test_scalars_natural_order() {
		assert_eq!(compare(&Value::bool(false), &Value::bool(true)), Less);
		assert_eq!(compare(&Value::utf8("abc"), &Value::utf8("abd")), Less);
		assert_eq!(compare(&Value::int4(10), &Value::int4(9)), Greater);
		assert_eq!(compare(&Value::float8(-0.0), &Value::float8(0.0)), Equal);
	}

	#[test]
	fn test_numbers_compare_across_widths() {
		assert_eq!(compare(&Value::int1(5i8), &Value::uint16(5u128)), Equal);
		assert_eq!(compare(&Value::int8(-1i64), &Value::uint1(0u8)), Less);
		assert_eq!(compare(&Value::float4(2.5f32), &Value::int4(2)), Greater);
		assert_eq!(compare(&Value::int16(1i128 << 60), &Value::float8((1u64 << 60) as f64)), Equal);
		assert_eq!(compare(&Value::int16((1i128 << 60) + 1), &Value::float8((1u64 << 60) as f64)), Greater);
	}

	#[test]
	fn test_list_prefix_sorts_first() {
		let short = Value::list([Value::int4(1)]);
		let long = Value::list([Value::int4(1), Value::int4(0)]);
		assert_eq!(compare(&short, &long), Less);
		assert_eq!(compare(&long, &short), Greater);
		assert_eq!(compare(&Value::list([]), &short), Less);
	}

	#[test]
	fn test_list_element_wise() {
		let l = Value::list([Value::int4(1), Value::int4(3)]);
		let r = Value::list([Value::int4(2)]);
		assert_eq!(compare(&l, &r), Less);
	}

	#[test]
	fn test_object_insertion_order_irrelevant() {
		let l = Value::object([("k1", Value::utf8("v1")), ("k2", Value::utf8("v2"))]);
		let r = Value::object([("k2", Value::utf8("v2")), ("k1", Value::utf8("v1"))]);
		assert_eq!(compare(&l, &r), Equal);
		assert_eq!(try_compare(&l, &r).unwrap(), Equal);
	}

	#[test]
	fn test_object_key_set_mismatch() {
		let l = Value::object([("a", Value::int4(1))]);
		let r = Value::object([("a", Value::int4(1)), ("b", Value::int4(2))]);
		assert_eq!(compare(&l, &r), Less);
		assert_eq!(compare(&r, &l), Greater);
	}

	#[test]
	fn test_object_key_sets_before_values() {
		// {a: 9} < {b: 0} because key set [a] < [b], whatever the values
		let l = Value::object([("a", Value::int4(9))]);
		let r = Value::object([("b", Value::int4(0))]);
		assert_eq!(compare(&l, &r), Less);

		// a key only present on one side is never reconciled by values
		let l = Value::object([("a", Value::Undefined)]);
		let r = Value::object::<&str>([]);
		assert_ne!(compare(&l, &r), Equal);
	}

	#[test]
	fn test_object_values_in_key_order() {
		let l = Value::object([("b", Value::int4(1)), ("a", Value::int4(2))]);
		let r = Value::object([("a", Value::int4(1)), ("b", Value::int4(2))]);
		// compares a first: 2 > 1
		assert_eq!(compare(&l, &r), Greater);
	}

	#[test]
	fn test_nested_objects() {
		let l = Value::object([("o", Value::object([("x", Value::int4(1)), ("y", Value::int4(2))]))]);
		let r = Value::object([("o", Value::object([("y", Value::int4(2)), ("x", Value::int4(1))]))]);
		assert_eq!(compare(&l, &r), Equal);
	}

	#[test]
	fn test_incompatible_kinds() {
		assert_eq!(compare(&Value::int4(1), &Value::utf8("1")), Less);
		assert_eq!(compare(&Value::utf8("1"), &Value::int4(1)), Greater);

		let err = try_compare(&Value::int4(1), &Value::utf8("1")).unwrap_err();
		assert_eq!(err.code(), "COMPARE_001");

		let l = Value::list([Value::int4(1)]);
		let r = Value::list([Value::bool(true)]);
		assert_eq!(try_compare(&l, &r).unwrap_err().code(), "COMPARE_001");
	}

	#[test]
	fn test_mixed_key_kinds_rejected() {
		let l = Value::object([(Value::int4(1), Value::int4(1)), (Value::utf8("a"), Value::int4(1))]);
		let r = Value::object([(Value::int4(1), Value::int4(1))]);
		assert_eq!(try_compare(&l, &r).unwrap_err().code(), "COMPARE_001");
		assert_eq!(compare(&l, &r), Greater);
	}

	#[test]
	fn test_try_compare_allows_nulls() {
		assert_eq!(try_compare(&Value::Undefined, &Value::utf8("a")).unwrap(), Greater);
		let l = Value::list([Value::Undefined, Value::int4(1)]);
		let r = Value::list([Value::Undefined, Value::int4(1)]);
		assert_eq!(try_compare(&l, &r).unwrap(), Equal);
	}

	#[test]
	fn test_antisymmetric() {
		let samples = samples();
		for a in &samples {
			for b in &samples {
				assert_eq!(compare(a, b), compare(b, a).reverse(), "{a} vs {b}");
			}
		}
	}

	#[test]
	fn test_transitive() {
		let samples = samples();
		for a in &samples {
			for b in &samples {
				for c in &samples {
					if compare(a, b) != Greater && compare(b, c) != Greater {
						assert_ne!(compare(a, c), Greater, "{a} <= {b} <= {c}");
					}
				}
			}
		}
	}

	#[test]
	fn test_equality_consistent_with_compare() {
		let samples = samples();
		for a in &samples {
			for b in &samples {
				assert_eq!(a == b, compare(a, b) == Equal, "{a} vs {b}");
			}
		}
	}

	#[test]
	fn test_sorting_is_deterministic() {
		let mut forward = samples();
		let mut backward = samples();
		backward.reverse();
		forward.sort();
		backward.sort();
		assert_eq!(forward.iter().map(ToString::to_string).collect::<Vec<_>>(), backward.iter().map(ToString::to_string).collect::<Vec<_>>());
	}
}
