// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Display, Formatter};

use polyfn_type::{Type, Value};

pub mod error;
pub mod operator;
pub mod registry;
pub mod signature;

pub use error::FunctionError;
pub use polyfn_type::Result;
pub use registry::{Functions, FunctionsBuilder, builtin};
pub use signature::{
	Signature, TypeBound, TypeVariableConstraint,
	bind::{Binding, bind},
	orderable_type_variable, type_variable,
};

/// Per-query state handed through to every evaluation.
///
/// Opaque to the functions in this crate.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext;

impl EvaluationContext {
	pub fn new() -> Self {
		Self
	}
}

/// Lazily computed argument of a function call, evaluated at most once per call.
pub trait Input {
	fn value(&self) -> Value;
}

impl Input for Value {
	fn value(&self) -> Value {
		self.clone()
	}
}

/// Computes the argument value on demand
pub struct Lazy<F>(pub F);

impl<F> Input for Lazy<F>
where
	F: Fn() -> Value,
{
	fn value(&self) -> Value {
		(self.0)()
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionIdent {
	pub name: String,
	pub arguments: Vec<Type>,
}

impl FunctionIdent {
	pub fn new(name: impl Into<String>, arguments: Vec<Type>) -> Self {
		Self {
			name: name.into(),
			arguments,
		}
	}
}

impl Display for FunctionIdent {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (idx, argument) in self.arguments.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(argument, f)?;
		}
		f.write_str(")")
	}
}

/// A function resolved for concrete argument types
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionInfo {
	pub ident: FunctionIdent,
	pub return_type: Type,
}

impl FunctionInfo {
	pub fn new(ident: FunctionIdent, return_type: Type) -> Self {
		Self {
			ident,
			return_type,
		}
	}

	pub fn name(&self) -> &str {
		&self.ident.name
	}

	pub fn arguments(&self) -> &[Type] {
		&self.ident.arguments
	}
}

/// A scalar function instance, created once per call site and evaluated once per row.
///
/// Implementations hold no mutable state; one instance may be evaluated from
/// many threads at the same time.
pub trait ScalarFunction: Send + Sync + Debug {
	fn info(&self) -> &FunctionInfo;

	fn signature(&self) -> &Signature;

	fn evaluate(&self, ctx: &EvaluationContext, args: &[&dyn Input]) -> Result<Value>;
}
