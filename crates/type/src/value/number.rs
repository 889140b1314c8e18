// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	hash::{Hash, Hasher},
};

use super::Value;

/// Width-independent view of a numeric value.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Number {
	Int(i128),
	Uint(u128),
	Float(f64),
}

// 2^127 and 2^128, exactly representable as f64
const TWO_POW_127: f64 = 170141183460469231731687303715884105728.0;
const TWO_POW_128: f64 = 340282366920938463463374607431768211456.0;

impl Number {
	pub(crate) fn of(value: &Value) -> Option<Number> {
		Some(match value {
			Value::Int1(v) => Number::Int(*v as i128),
			Value::Int2(v) => Number::Int(*v as i128),
			Value::Int4(v) => Number::Int(*v as i128),
			Value::Int8(v) => Number::Int(*v as i128),
			Value::Int16(v) => Number::Int(*v),
			Value::Uint1(v) => Number::Uint(*v as u128),
			Value::Uint2(v) => Number::Uint(*v as u128),
			Value::Uint4(v) => Number::Uint(*v as u128),
			Value::Uint8(v) => Number::Uint(*v as u128),
			Value::Uint16(v) => Number::Uint(*v),
			Value::Float4(v) => Number::Float(v.value() as f64),
			Value::Float8(v) => Number::Float(v.value()),
			_ => return None,
		})
	}

	/// Exact comparison of the mathematical values, no rounding through a common width.
	pub(crate) fn cmp(&self, other: &Number) -> Ordering {
		match (*self, *other) {
			(Number::Int(l), Number::Int(r)) => l.cmp(&r),
			(Number::Uint(l), Number::Uint(r)) => l.cmp(&r),
			(Number::Float(l), Number::Float(r)) => l.total_cmp(&r),
			(Number::Int(l), Number::Uint(r)) => cmp_int_uint(l, r),
			(Number::Uint(l), Number::Int(r)) => cmp_int_uint(r, l).reverse(),
			(Number::Int(l), Number::Float(r)) => cmp_int_float(l, r),
			(Number::Float(l), Number::Int(r)) => cmp_int_float(r, l).reverse(),
			(Number::Uint(l), Number::Float(r)) => cmp_uint_float(l, r),
			(Number::Float(l), Number::Uint(r)) => cmp_uint_float(r, l).reverse(),
		}
	}

	/// Numerically equal values produce the same canonical form and therefore the same hash.
	fn canonical(&self) -> Number {
		match *self {
			Number::Uint(v) if v <= i128::MAX as u128 => Number::Int(v as i128),
			Number::Float(f) if f.fract() == 0.0 && f >= -TWO_POW_127 && f < TWO_POW_127 => Number::Int(f as i128),
			Number::Float(f) if f.fract() == 0.0 && f >= TWO_POW_127 && f < TWO_POW_128 => Number::Uint(f as u128),
			other => other,
		}
	}
}

impl Hash for Number {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match self.canonical() {
			Number::Int(v) => {
				0u8.hash(state);
				v.hash(state);
			}
			Number::Uint(v) => {
				1u8.hash(state);
				v.hash(state);
			}
			Number::Float(v) => {
				2u8.hash(state);
				v.to_bits().hash(state);
			}
		}
	}
}

fn cmp_int_uint(l: i128, r: u128) -> Ordering {
	if l < 0 {
		Ordering::Less
	} else {
		(l as u128).cmp(&r)
	}
}

fn cmp_int_float(l: i128, r: f64) -> Ordering {
	if r >= TWO_POW_127 {
		return Ordering::Less;
	}
	if r < -TWO_POW_127 {
		return Ordering::Greater;
	}
	let truncated = r.trunc();
	match l.cmp(&(truncated as i128)) {
		Ordering::Equal => truncated.partial_cmp(&r).unwrap_or(Ordering::Equal),
		ordering => ordering,
	}
}

fn cmp_uint_float(l: u128, r: f64) -> Ordering {
	if r < 0.0 {
		return Ordering::Greater;
	}
	if r >= TWO_POW_128 {
		return Ordering::Less;
	}
	let truncated = r.trunc();
	match l.cmp(&(truncated as u128)) {
		Ordering::Equal => truncated.partial_cmp(&r).unwrap_or(Ordering::Equal),
		ordering => ordering,
	}
}
