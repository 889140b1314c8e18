// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use polyfn_type::{Type, return_error};

use crate::{FunctionInfo, FunctionsBuilder, Input, error::FunctionError};

pub mod compare;
pub mod equal;

pub use compare::{CmpOperator, Comparison};
pub use equal::EqOperator;

/// Every operator evaluates to a boolean or null
pub const RETURN_TYPE: Type = Type::Boolean;

/// Registers all comparison operators
pub fn register(builder: FunctionsBuilder) -> FunctionsBuilder {
	builder.configure(EqOperator::register).configure(CmpOperator::register)
}

/// Operand category an operator instance was resolved for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandShape {
	Scalar,
	Sequence,
	KeyedCollection,
}

impl OperandShape {
	/// Derived from the first argument whose type is defined
	pub fn of(arguments: &[Type]) -> Self {
		match arguments.iter().find(|t| !t.is_undefined()) {
			Some(Type::Object(_, _)) => OperandShape::KeyedCollection,
			Some(Type::List(_)) => OperandShape::Sequence,
			_ => OperandShape::Scalar,
		}
	}
}

pub(crate) fn binary_operands<'a>(
	info: &FunctionInfo,
	args: &[&'a dyn Input],
) -> crate::Result<(&'a dyn Input, &'a dyn Input)> {
	match args {
		[left, right] => Ok((*left, *right)),
		_ => return_error!(FunctionError::ArityMismatch {
			name: info.name().to_string(),
			expected: 2,
			actual: args.len(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use polyfn_type::Type;

	use super::OperandShape;

	#[test]
	fn test_operand_shape() {
		assert_eq!(OperandShape::of(&[Type::Int4, Type::Int4]), OperandShape::Scalar);
		assert_eq!(OperandShape::of(&[Type::Undefined, Type::Undefined]), OperandShape::Scalar);
		assert_eq!(OperandShape::of(&[Type::list(Type::Utf8), Type::Undefined]), OperandShape::Sequence);
		assert_eq!(
			OperandShape::of(&[Type::Undefined, Type::object(Type::Utf8, Type::Int4)]),
			OperandShape::KeyedCollection
		);
	}
}
