// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
};

use polyfn_type::{TypeSignature, Value, try_compare};

use super::{RETURN_TYPE, binary_operands};
use crate::{
	EvaluationContext, FunctionInfo, FunctionsBuilder, Input, ScalarFunction,
	signature::{Signature, orderable_type_variable},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
	LessThan,
	LessThanOrEqual,
	GreaterThan,
	GreaterThanOrEqual,
}

impl Comparison {
	pub const ALL: [Comparison; 4] = [
		Comparison::LessThan,
		Comparison::LessThanOrEqual,
		Comparison::GreaterThan,
		Comparison::GreaterThanOrEqual,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Comparison::LessThan => "op_<",
			Comparison::LessThanOrEqual => "op_<=",
			Comparison::GreaterThan => "op_>",
			Comparison::GreaterThanOrEqual => "op_>=",
		}
	}

	pub fn from_name(name: &str) -> Option<Comparison> {
		Self::ALL.into_iter().find(|c| c.name() == name)
	}

	pub fn holds(&self, ordering: Ordering) -> bool {
		match self {
			Comparison::LessThan => ordering.is_lt(),
			Comparison::LessThanOrEqual => ordering.is_le(),
			Comparison::GreaterThan => ordering.is_gt(),
			Comparison::GreaterThanOrEqual => ordering.is_ge(),
		}
	}
}

impl Display for Comparison {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Range comparison operators over two arguments of one orderable type
#[derive(Debug)]
pub struct CmpOperator {
	info: FunctionInfo,
	signature: Signature,
	comparison: Comparison,
}

impl CmpOperator {
	pub fn new(info: FunctionInfo, signature: Signature, comparison: Comparison) -> Self {
		Self {
			info,
			signature,
			comparison,
		}
	}

	pub fn register(builder: FunctionsBuilder) -> FunctionsBuilder {
		Comparison::ALL.into_iter().fold(builder, |builder, comparison| {
			let element = TypeSignature::variable("E");
			builder.register_scalar(
				Signature::scalar(comparison.name(), [element.clone(), element], RETURN_TYPE)
					.with_type_variable_constraints([orderable_type_variable("E")]),
				move |signature, info| CmpOperator::new(info, signature.clone(), comparison),
			)
		})
	}

	pub fn comparison(&self) -> Comparison {
		self.comparison
	}
}

impl ScalarFunction for CmpOperator {
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

		let ordering = try_compare(&left, &right)?;
		Ok(Value::Boolean(self.comparison.holds(ordering)))
	}
}
