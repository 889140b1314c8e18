// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod compare;
mod number;
mod ordered_f32;
mod ordered_f64;
pub mod r#type;

pub use ordered_f32::OrderedF32;
pub use ordered_f64::{NaNError, OrderedF64};
pub use r#type::Type;

use number::Number;

/// Where null sorts relative to non-null values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NullsOrder {
	First,
	Last,
}

/// Null ordering applied by [`compare::compare`] and the `Ord` implementation of [`Value`].
///
/// Null sorts after every defined value, as in an ascending SQL `ORDER BY`.
pub const NULLS_ORDER: NullsOrder = NullsOrder::Last;

/// A dynamically typed value as handed to functions by the execution engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// A 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A UTF-8 encoded text
	Utf8(String),
	/// An ordered sequence of values
	List(Vec<Value>),
	/// A keyed collection; insertion order is kept but never compared
	Object(IndexMap<Value, Value>),
}

/// Coarse classification used to rank values of unrelated types
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
	Undefined,
	Boolean,
	Number,
	Utf8,
	List,
	Object,
}

impl Display for ValueKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ValueKind::Undefined => "undefined",
			ValueKind::Boolean => "boolean",
			ValueKind::Number => "number",
			ValueKind::Utf8 => "utf8",
			ValueKind::List => "list",
			ValueKind::Object => "object",
		})
	}
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn int16(v: impl Into<i128>) -> Self {
		Value::Int16(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn uint16(v: impl Into<u128>) -> Self {
		Value::Uint16(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
		Value::List(values.into_iter().collect())
	}

	/// Builds a keyed collection; a repeated key keeps its first position and last value
	pub fn object<K: Into<Value>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
		Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Undefined => ValueKind::Undefined,
			Value::Boolean(_) => ValueKind::Boolean,
			Value::Float4(_)
			| Value::Float8(_)
			| Value::Int1(_)
			| Value::Int2(_)
			| Value::Int4(_)
			| Value::Int8(_)
			| Value::Int16(_)
			| Value::Uint1(_)
			| Value::Uint2(_)
			| Value::Uint4(_)
			| Value::Uint8(_)
			| Value::Uint16(_) => ValueKind::Number,
			Value::Utf8(_) => ValueKind::Utf8,
			Value::List(_) => ValueKind::List,
			Value::Object(_) => ValueKind::Object,
		}
	}

	/// The concrete type of this value.
	///
	/// Collections take their element types from the first defined entry, an
	/// empty or all-null collection has `undefined` element types.
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Utf8(_) => Type::Utf8,
			Value::List(values) => Type::list(element_type(values.iter())),
			Value::Object(entries) => {
				// sorted so the derived type never depends on insertion order
				let mut sorted = entries.iter().collect::<Vec<_>>();
				sorted.sort_by(|(l, _), (r, _)| compare::compare(l, r));
				let key = element_type(sorted.iter().map(|(k, _)| *k));
				let value = element_type(sorted.iter().map(|(_, v)| *v));
				Type::object(key, value)
			}
		}
	}
}

/// Unifies the types of all elements. On a conflict the earlier type is kept.
fn element_type<'a>(values: impl Iterator<Item = &'a Value>) -> Type {
	values.map(Value::get_type).fold(Type::Undefined, |acc, ty| acc.unify(&ty).unwrap_or(acc))
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Value {}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Value {
	fn cmp(&self, other: &Self) -> Ordering {
		compare::compare(self, other)
	}
}

impl Hash for Value {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.kind().hash(state);
		match self {
			Value::Undefined => {}
			Value::Boolean(v) => v.hash(state),
			Value::Utf8(v) => v.hash(state),
			Value::List(values) => {
				values.len().hash(state);
				for value in values {
					value.hash(state);
				}
			}
			Value::Object(entries) => {
				// order independent, consistent with the comparator
				let mut sorted = entries.iter().collect::<Vec<_>>();
				sorted.sort_by(|(l, _), (r, _)| compare::compare(l, r));
				sorted.len().hash(state);
				for (key, value) in sorted {
					key.hash(state);
					value.hash(state);
				}
			}
			number => {
				if let Some(number) = Number::of(number) {
					number.hash(state);
				}
			}
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Utf8(value) => write!(f, "'{}'", value),
			Value::List(values) => {
				f.write_str("[")?;
				for (idx, value) in values.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str("]")
			}
			Value::Object(entries) => {
				f.write_str("{")?;
				for (idx, (key, value)) in entries.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", key, value)?;
				}
				f.write_str("}")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::hash_map::RandomState, hash::BuildHasher};

	use super::*;

	#[test]
	fn test_nan_becomes_undefined() {
		assert_eq!(Value::float8(f64::NAN), Value::Undefined);
		assert_eq!(Value::float4(f32::NAN), Value::Undefined);
	}

	#[test]
	fn test_get_type_of_collections() {
		let list = Value::list([Value::Undefined, Value::int4(1)]);
		assert_eq!(list.get_type(), Type::list(Type::Int4));

		let object = Value::object([("x", Value::utf8("a"))]);
		assert_eq!(object.get_type(), Type::object(Type::Utf8, Type::Utf8));

		assert_eq!(Value::list([]).get_type(), Type::list(Type::Undefined));
	}

	#[test]
	fn test_get_type_ignores_insertion_order() {
		let l = Value::object([("a", Value::list([Value::int4(1)])), ("b", Value::utf8("x"))]);
		let r = Value::object([("b", Value::utf8("x")), ("a", Value::list([Value::int4(1)]))]);
		assert_eq!(l, r);
		assert_eq!(l.get_type(), r.get_type());

		let l = Value::object([("a", Value::Undefined), ("b", Value::int4(1))]);
		let r = Value::object([("b", Value::int4(1)), ("a", Value::Undefined)]);
		assert_eq!(l.get_type(), Type::object(Type::Utf8, Type::Int4));
		assert_eq!(r.get_type(), Type::object(Type::Utf8, Type::Int4));
	}

	#[test]
	fn test_get_type_refines_nested_elements() {
		let list = Value::list([Value::list([]), Value::list([Value::int8(1i64)])]);
		assert_eq!(list.get_type(), Type::list(Type::list(Type::Int8)));

		let object = Value::object([
			("a", Value::object([("x", Value::Undefined)])),
			("b", Value::object([("y", Value::bool(true))])),
		]);
		assert_eq!(object.get_type(), Type::object(Type::Utf8, Type::object(Type::Utf8, Type::Boolean)));
	}

	#[test]
	fn test_object_hash_ignores_insertion_order() {
		let state = RandomState::new();
		let a = Value::object([("k1", Value::int4(1)), ("k2", Value::int4(2))]);
		let b = Value::object([("k2", Value::int4(2)), ("k1", Value::int4(1))]);
		assert_eq!(a, b);
		assert_eq!(state.hash_one(&a), state.hash_one(&b));
	}

	#[test]
	fn test_numbers_of_different_width_are_equal_keys() {
		let state = RandomState::new();
		assert_eq!(Value::int4(3), Value::int8(3i64));
		assert_eq!(state.hash_one(Value::int4(3)), state.hash_one(Value::uint1(3u8)));
		assert_eq!(state.hash_one(Value::int4(3)), state.hash_one(Value::float8(3.0)));
	}

	#[test]
	fn test_object_lookup_by_equal_key() {
		let object = Value::object([(Value::int8(1i64), Value::utf8("one"))]);
		let Value::Object(entries) = object else {
			unreachable!()
		};
		assert_eq!(entries.get(&Value::int4(1)), Some(&Value::utf8("one")));
	}

	#[test]
	fn test_display() {
		let value = Value::object([("a", Value::list([Value::int4(1), Value::Undefined]))]);
		assert_eq!(value.to_string(), "{'a': [1, undefined]}");
	}
}
