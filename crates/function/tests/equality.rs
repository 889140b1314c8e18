// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! End-to-end tests for the equality operator resolved from the builtin registry

use polyfn_function::{EvaluationContext, Functions, Input, builtin, operator::EqOperator};
use polyfn_testing::{
	input::{CountingInput, UnreachableInput},
	logging,
	value::{ints, object},
};
use polyfn_type::{Type, Value, compare};

fn functions() -> Functions {
	logging::init();
	builtin().build().unwrap()
}

fn equals(functions: &Functions, left: &Value, right: &Value) -> Value {
	let function = functions.resolve(EqOperator::NAME, &[left.get_type(), right.get_type()]).unwrap();
	function.evaluate(&EvaluationContext::default(), &[left, right]).unwrap()
}

#[test]
fn test_objects_with_same_entries_in_different_order_are_equal() {
	let functions = functions();
	let left = object([("x", Value::int4(1)), ("y", Value::int4(2))]);
	let right = object([("y", Value::int4(2)), ("x", Value::int4(1))]);
	assert_eq!(equals(&functions, &left, &right), Value::Boolean(true));
}

#[test]
fn test_objects_with_different_values_are_not_equal() {
	let functions = functions();
	let left = object([("x", Value::int4(1))]);
	let right = object([("x", Value::int4(2))]);
	assert_eq!(equals(&functions, &left, &right), Value::Boolean(false));
}

#[test]
fn test_null_object_operand_is_unknown() {
	let functions = functions();
	let value = object([("x", Value::int4(1))]);
	let ty = value.get_type();
	let function = functions.resolve(EqOperator::NAME, &[ty.clone(), ty]).unwrap();

	let ctx = EvaluationContext::default();
	let null = Value::Undefined;
	assert_eq!(function.evaluate(&ctx, &[&null, &value]).unwrap(), Value::Undefined);
	assert_eq!(function.evaluate(&ctx, &[&value, &null]).unwrap(), Value::Undefined);
	assert_eq!(function.evaluate(&ctx, &[&null, &null]).unwrap(), Value::Undefined);
}

#[test]
fn test_key_set_mismatch_is_not_equal() {
	let functions = functions();
	let left = object([("a", Value::int4(1))]);
	let right = object([("a", Value::int4(1)), ("b", Value::int4(2))]);
	assert_eq!(equals(&functions, &left, &right), Value::Boolean(false));
	assert_eq!(equals(&functions, &right, &left), Value::Boolean(false));
}

#[test]
fn test_object_overload_is_resolved_for_objects() {
	let functions = functions();
	let ty = Type::object(Type::Utf8, Type::Int4);
	let function = functions.resolve(EqOperator::NAME, &[ty.clone(), ty]).unwrap();
	assert_eq!(function.signature().to_string(), "op_=(object(K, V), object(K, V)):boolean");

	let function = functions.resolve(EqOperator::NAME, &[Type::Utf8, Type::Utf8]).unwrap();
	assert_eq!(function.signature().to_string(), "op_=(E, E):boolean");
}

#[test]
fn test_equality_agrees_with_comparator() {
	let functions = functions();
	let samples = [
		Value::int4(1),
		Value::int4(2),
		Value::utf8("a"),
		Value::utf8("b"),
		ints([1, 2]),
		ints([1, 2, 3]),
		Value::bool(true),
		Value::bool(false),
		Value::float8(1.5),
		object([("a", Value::int4(1))]),
		object([("a", Value::int4(2))]),
		object([("a", Value::int4(1)), ("b", Value::int4(2))]),
		object([("b", Value::int4(2)), ("a", Value::int4(1))]),
		object([("b", Value::int4(1))]),
		object([("a", Value::Undefined)]),
		object([("a", Value::Undefined), ("b", Value::int4(2))]),
		object([("n", object([("x", Value::int4(1))]))]),
		object([("n", object([("x", Value::int4(1)), ("y", Value::int4(2))]))]),
		object([("n", object([("y", Value::int4(2)), ("x", Value::int4(1))]))]),
		object([("n", object([("x", Value::Undefined)]))]),
	];
	let mut compared = 0;
	for left in &samples {
		for right in samples.iter().filter(|r| r.get_type().unify(&left.get_type()).is_some()) {
			let expected = compare(left, right).is_eq();
			assert_eq!(equals(&functions, left, right), Value::Boolean(expected), "{} = {}", left, right);
			assert_eq!(equals(&functions, left, right), equals(&functions, right, left), "{} = {}", left, right);
			compared += 1;
		}
	}
	assert!(compared > samples.len());
}

#[test]
fn test_null_valued_entries_are_compared_not_propagated() {
	let functions = functions();
	let left = object([("a", Value::Undefined)]);
	let right = object([("a", Value::Undefined)]);
	assert_eq!(equals(&functions, &left, &right), Value::Boolean(true));
	assert_eq!(equals(&functions, &left, &object([("a", Value::int4(1))])), Value::Boolean(false));
}

#[test]
fn test_null_left_does_not_consult_right() {
	let functions = functions();
	let function = functions.resolve(EqOperator::NAME, &[Type::Undefined, Type::Int4]).unwrap();
	let left = CountingInput::null();
	let right = UnreachableInput;
	let args: [&dyn Input; 2] = [&left, &right];
	assert_eq!(function.evaluate(&EvaluationContext::default(), &args).unwrap(), Value::Undefined);
	assert_eq!(left.calls(), 1);
}

#[test]
fn test_operands_are_evaluated_once() {
	let functions = functions();
	let ty = Type::object(Type::Utf8, Type::Int4);
	let function = functions.resolve(EqOperator::NAME, &[ty.clone(), ty]).unwrap();
	let left = CountingInput::new(object([("x", Value::int4(1))]));
	let right = CountingInput::new(object([("x", Value::int4(1))]));
	let args: [&dyn Input; 2] = [&left, &right];
	assert_eq!(function.evaluate(&EvaluationContext::default(), &args).unwrap(), Value::Boolean(true));
	assert_eq!(left.calls(), 1);
	assert_eq!(right.calls(), 1);
}

#[test]
fn test_nested_objects() {
	let functions = functions();
	let left = object([("outer", object([("a", ints([1, 2])), ("b", ints([3]))]))]);
	let right = object([("outer", object([("b", ints([3])), ("a", ints([1, 2]))]))]);
	assert_eq!(left.get_type(), right.get_type());
	assert_eq!(equals(&functions, &left, &right), Value::Boolean(true));

	let different = object([("outer", object([("b", ints([3])), ("a", ints([2, 1]))]))]);
	assert_eq!(equals(&functions, &left, &different), Value::Boolean(false));
}
