// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Reverse,
	fmt::{self, Display, Formatter},
};

use polyfn_type::{Type, TypeSignature, return_error};
use serde::{Deserialize, Serialize};

use crate::error::FunctionError;

pub mod bind;

/// Restricts the types a type variable may be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeBound {
	Any,
	/// Types with a meaningful total order, which excludes objects
	Orderable,
}

impl TypeBound {
	pub fn accepts(&self, ty: &Type) -> bool {
		match self {
			TypeBound::Any => true,
			TypeBound::Orderable => ty.is_orderable(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeVariableConstraint {
	pub name: String,
	pub bound: TypeBound,
}

/// Declares an unconstrained type variable
pub fn type_variable(name: impl Into<String>) -> TypeVariableConstraint {
	TypeVariableConstraint {
		name: name.into(),
		bound: TypeBound::Any,
	}
}

pub fn orderable_type_variable(name: impl Into<String>) -> TypeVariableConstraint {
	TypeVariableConstraint {
		name: name.into(),
		bound: TypeBound::Orderable,
	}
}

/// Declared shape of one overload: name, parameter and return type signatures,
/// and the type variables they may use.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
	name: String,
	arguments: Vec<TypeSignature>,
	return_type: TypeSignature,
	type_variables: Vec<TypeVariableConstraint>,
}

impl Signature {
	pub fn scalar(
		name: impl Into<String>,
		arguments: impl IntoIterator<Item = TypeSignature>,
		return_type: impl Into<TypeSignature>,
	) -> Self {
		Self {
			name: name.into(),
			arguments: arguments.into_iter().collect(),
			return_type: return_type.into(),
			type_variables: vec![],
		}
	}

	pub fn with_type_variable_constraints(
		mut self,
		constraints: impl IntoIterator<Item = TypeVariableConstraint>,
	) -> Self {
		self.type_variables.extend(constraints);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn arguments(&self) -> &[TypeSignature] {
		&self.arguments
	}

	pub fn arity(&self) -> usize {
		self.arguments.len()
	}

	pub fn return_type(&self) -> &TypeSignature {
		&self.return_type
	}

	pub fn type_variables(&self) -> &[TypeVariableConstraint] {
		&self.type_variables
	}

	pub fn constraint(&self, variable: &str) -> Option<&TypeVariableConstraint> {
		self.type_variables.iter().find(|c| c.name == variable)
	}

	/// Canonical form of the parameter list with type variables renamed by first
	/// appearance. Signatures of one name must not share a key.
	pub fn shape_key(&self) -> String {
		let mut seen = Vec::new();
		self.arguments.iter().map(|a| a.shape_key(&mut seen)).collect::<Vec<_>>().join(", ")
	}

	pub fn specificity(&self) -> Specificity {
		Specificity {
			free_positions: self.arguments.iter().filter(|a| a.is_variable()).count(),
			structure: Reverse(self.arguments.iter().map(TypeSignature::structural_nodes).sum()),
		}
	}

	/// Every type variable must be declared, and every variable of the return type
	/// must occur in some argument.
	pub fn validate(&self) -> crate::Result<()> {
		let mut argument_variables = Vec::new();
		for argument in &self.arguments {
			for variable in argument.variables() {
				if !argument_variables.contains(&variable) {
					argument_variables.push(variable);
				}
			}
		}

		for variable in argument_variables.iter().chain(self.return_type.variables().iter()) {
			if self.constraint(variable).is_none() {
				return_error!(FunctionError::UndeclaredTypeVariable {
					signature: self.to_string(),
					variable: variable.to_string(),
				});
			}
		}

		for variable in self.return_type.variables() {
			if !argument_variables.contains(&variable) {
				return_error!(FunctionError::UnboundReturnVariable {
					signature: self.to_string(),
					variable: variable.to_string(),
				});
			}
		}

		Ok(())
	}
}

impl Display for Signature {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (idx, argument) in self.arguments.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(argument, f)?;
		}
		write!(f, "):{}", self.return_type)
	}
}

/// Orders candidate signatures from most to least specific.
///
/// Fewer parameters that are bare type variables come first, then more structure
/// (concrete types and shapes) across all parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
	free_positions: usize,
	structure: Reverse<usize>,
}
