// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeMap;

use polyfn_type::{Type, TypeSignature};

use super::Signature;

/// Concrete types assigned to the type variables of one signature
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
	types: BTreeMap<String, Type>,
}

impl Binding {
	pub fn get(&self, variable: &str) -> Option<&Type> {
		self.types.get(variable)
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
		self.types.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Binds `variable`, or refines an existing binding when both unify
	fn assign(&mut self, variable: &str, ty: &Type) -> bool {
		match self.types.get_mut(variable) {
			None => {
				self.types.insert(variable.to_string(), ty.clone());
				true
			}
			Some(bound) => match bound.unify(ty) {
				Some(unified) => {
					*bound = unified;
					true
				}
				None => false,
			},
		}
	}

	/// Instantiates `signature` with this binding
	pub fn apply(&self, signature: &TypeSignature) -> Option<Type> {
		signature.instantiate(&|variable| self.get(variable))
	}
}

/// Matches argument types against a signature.
///
/// Every occurrence of a type variable must bind to the same type, where
/// `undefined` is compatible with any type. Returns `None` when arity, shapes or
/// variable bounds disagree.
pub fn bind(signature: &Signature, arguments: &[Type]) -> Option<Binding> {
	if signature.arity() != arguments.len() {
		return None;
	}

	let mut binding = Binding::default();
	for (parameter, argument) in signature.arguments().iter().zip(arguments) {
		if !bind_type(parameter, argument, &mut binding) {
			return None;
		}
	}

	for constraint in signature.type_variables() {
		if let Some(ty) = binding.get(&constraint.name) {
			if !constraint.bound.accepts(ty) {
				return None;
			}
		}
	}

	Some(binding)
}

fn bind_type(parameter: &TypeSignature, argument: &Type, binding: &mut Binding) -> bool {
	match parameter {
		TypeSignature::Concrete(expected) => expected.unify(argument).is_some(),
		TypeSignature::Variable(variable) => binding.assign(variable, argument),
		TypeSignature::Parametrized {
			kind,
			parameters,
		} => {
			if argument.is_undefined() {
				return parameters.iter().all(|p| bind_type(p, &Type::Undefined, binding));
			}
			match argument.shape() {
				Some((actual, types)) if actual == *kind && types.len() == parameters.len() => {
					parameters.iter().zip(types).all(|(p, t)| bind_type(p, t, binding))
				}
				_ => false,
			}
		}
	}
}
