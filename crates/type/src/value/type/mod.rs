// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod signature;

/// A resolved, variable-free type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// The type of the null literal; unifies with every other type
	Undefined,
	Boolean,
	Float4,
	Float8,
	Int1,
	Int2,
	Int4,
	Int8,
	Int16,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Uint16,
	Utf8,
	/// An ordered sequence of elements of one type
	List(Box<Type>),
	/// A keyed collection mapping keys of the first type to values of the second
	Object(Box<Type>, Box<Type>),
}

/// Kind of a parametrized type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
	List,
	Object,
}

impl ShapeKind {
	pub fn arity(&self) -> usize {
		match self {
			ShapeKind::List => 1,
			ShapeKind::Object => 2,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			ShapeKind::List => "list",
			ShapeKind::Object => "object",
		}
	}

	pub fn from_name(name: &str) -> Option<ShapeKind> {
		match name.to_ascii_lowercase().as_str() {
			"list" | "array" => Some(ShapeKind::List),
			"object" | "map" => Some(ShapeKind::Object),
			_ => None,
		}
	}
}

impl Display for ShapeKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl Type {
	pub fn list(element: Type) -> Type {
		Type::List(Box::new(element))
	}

	pub fn object(key: Type, value: Type) -> Type {
		Type::Object(Box::new(key), Box::new(value))
	}

	/// Scalar type for a lower-case type name
	pub fn from_name(name: &str) -> Option<Type> {
		Some(match name.to_ascii_lowercase().as_str() {
			"undefined" => Type::Undefined,
			"boolean" | "bool" => Type::Boolean,
			"float4" => Type::Float4,
			"float8" => Type::Float8,
			"int1" => Type::Int1,
			"int2" => Type::Int2,
			"int4" => Type::Int4,
			"int8" => Type::Int8,
			"int16" => Type::Int16,
			"uint1" => Type::Uint1,
			"uint2" => Type::Uint2,
			"uint4" => Type::Uint4,
			"uint8" => Type::Uint8,
			"uint16" => Type::Uint16,
			"utf8" | "text" => Type::Utf8,
			_ => return None,
		})
	}

	/// Shape kind and type parameters for parametrized types
	pub fn shape(&self) -> Option<(ShapeKind, Vec<&Type>)> {
		match self {
			Type::List(element) => Some((ShapeKind::List, vec![element.as_ref()])),
			Type::Object(key, value) => Some((ShapeKind::Object, vec![key.as_ref(), value.as_ref()])),
			_ => None,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	/// Keyed collections carry no meaningful order for range comparisons
	pub fn is_orderable(&self) -> bool {
		match self {
			Type::Object(_, _) => false,
			Type::List(element) => element.is_orderable(),
			_ => true,
		}
	}

	/// Unifies two types where `Undefined` stands for "any type", at any depth.
	///
	/// Returns the more defined of both, or `None` when they disagree.
	pub fn unify(&self, other: &Type) -> Option<Type> {
		match (self, other) {
			(Type::Undefined, other) => Some(other.clone()),
			(this, Type::Undefined) => Some(this.clone()),
			(Type::List(l), Type::List(r)) => Some(Type::list(l.unify(r)?)),
			(Type::Object(lk, lv), Type::Object(rk, rv)) => Some(Type::object(lk.unify(rk)?, lv.unify(rv)?)),
			(l, r) if l == r => Some(l.clone()),
			_ => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("undefined"),
			Type::Boolean => f.write_str("boolean"),
			Type::Float4 => f.write_str("float4"),
			Type::Float8 => f.write_str("float8"),
			Type::Int1 => f.write_str("int1"),
			Type::Int2 => f.write_str("int2"),
			Type::Int4 => f.write_str("int4"),
			Type::Int8 => f.write_str("int8"),
			Type::Int16 => f.write_str("int16"),
			Type::Uint1 => f.write_str("uint1"),
			Type::Uint2 => f.write_str("uint2"),
			Type::Uint4 => f.write_str("uint4"),
			Type::Uint8 => f.write_str("uint8"),
			Type::Uint16 => f.write_str("uint16"),
			Type::Utf8 => f.write_str("utf8"),
			Type::List(element) => write!(f, "list({})", element),
			Type::Object(key, value) => write!(f, "object({}, {})", key, value),
		}
	}
}
