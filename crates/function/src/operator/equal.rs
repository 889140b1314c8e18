// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use polyfn_type::{TypeSignature, Value, return_internal_error, try_compare};

use super::{OperandShape, RETURN_TYPE, binary_operands};
use crate::{
	EvaluationContext, FunctionInfo, FunctionsBuilder, Input, ScalarFunction,
	signature::{Signature, type_variable},
};

/// The equality operator `op_=` with SQL null semantics.
///
/// One generic overload accepts two arguments of a common type. A second, more
/// specific overload accepts two objects of the same key and value types and
/// compares them structurally, independent of insertion order.
#[derive(Debug)]
pub struct EqOperator {
	info: FunctionInfo,
	signature: Signature,
	shape: OperandShape,
}

impl EqOperator {
	pub const NAME: &'static str = "op_=";

	pub fn new(info: FunctionInfo, signature: Signature) -> Self {
		let shape = OperandShape::of(info.arguments());
		Self {
			info,
			signature,
			shape,
		}
	}

	pub fn register(builder: FunctionsBuilder) -> FunctionsBuilder {
		let element = TypeSignature::variable("E");
		let object = TypeSignature::object(TypeSignature::variable("K"), TypeSignature::variable("V"));

		builder
			.register_scalar(
				Signature::scalar(Self::NAME, [element.clone(), element], RETURN_TYPE)
					.with_type_variable_constraints([type_variable("E")]),
				|signature, info| EqOperator::new(info, signature.clone()),
			)
			.register_scalar(
				Signature::scalar(Self::NAME, [object.clone(), object], RETURN_TYPE)
					.with_type_variable_constraints([type_variable("K"), type_variable("V")]),
				|signature, info| EqOperator::new(info, signature.clone()),
			)
	}

	pub fn shape(&self) -> OperandShape {
		self.shape
	}
}

impl ScalarFunction for EqOperator {
	fn info(&self) -> &FunctionInfo {
		&self.info
	}

	fn signature(&self) -> &Signature {
		&self.signature
	}

	fn evaluate(&self, _ctx: &EvaluationContext, args: &[&dyn Input]) -> crate::Result<Value> {
		let (left, right) = binary_operands(&self.info, args)?;

		let left = left.value();
		if left.is_undefined() {
			return Ok(Value::Undefined);
		}
		let right = right.value();
		if right.is_undefined() {
			return Ok(Value::Undefined);
		}

		match (self.shape, &left, &right) {
			(OperandShape::Scalar, _, _)
			| (OperandShape::Sequence, Value::List(_), Value::List(_))
			| (OperandShape::KeyedCollection, Value::Object(_), Value::Object(_)) => {}
			(shape, l, r) => {
				return_internal_error!(
					"{} resolved for {:?} operands evaluated with {} and {}",
					self.info.ident,
					shape,
					l.kind(),
					r.kind()
				);
			}
		}

		Ok(Value::Boolean(try_compare(&left, &right)? == Ordering::Equal))
	}
}
