// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	iter::Peekable,
	str::CharIndices,
};

use serde::{Deserialize, Serialize};

use crate::{
	error::diagnostic::signature::{invalid_type_signature, not_parametrized, shape_arity_mismatch},
	return_error,
	value::r#type::{ShapeKind, Type},
};

/// Shape of a function parameter or return type, possibly generic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSignature {
	/// A fixed, variable-free type
	Concrete(Type),
	/// A type variable, scoped to the signature declaring it
	Variable(String),
	/// A list or object whose type parameters are signatures themselves
	Parametrized {
		kind: ShapeKind,
		parameters: Vec<TypeSignature>,
	},
}

impl TypeSignature {
	pub fn variable(name: impl Into<String>) -> Self {
		TypeSignature::Variable(name.into())
	}

	pub fn list(element: TypeSignature) -> Self {
		TypeSignature::Parametrized {
			kind: ShapeKind::List,
			parameters: vec![element],
		}
	}

	pub fn object(key: TypeSignature, value: TypeSignature) -> Self {
		TypeSignature::Parametrized {
			kind: ShapeKind::Object,
			parameters: vec![key, value],
		}
	}

	pub fn is_variable(&self) -> bool {
		matches!(self, TypeSignature::Variable(_))
	}

	/// Type variables in order of first appearance, without duplicates
	pub fn variables(&self) -> Vec<&str> {
		let mut result = Vec::new();
		self.collect_variables(&mut result);
		result
	}

	pub(crate) fn collect_variables<'a>(&'a self, out: &mut Vec<&'a str>) {
		match self {
			TypeSignature::Concrete(_) => {}
			TypeSignature::Variable(name) => {
				if !out.contains(&name.as_str()) {
					out.push(name.as_str());
				}
			}
			TypeSignature::Parametrized {
				parameters,
				..
			} => {
				for parameter in parameters {
					parameter.collect_variables(out);
				}
			}
		}
	}

	/// Number of nodes that constrain a matching type, i.e. everything except variables
	pub fn structural_nodes(&self) -> usize {
		match self {
			TypeSignature::Concrete(_) => 1,
			TypeSignature::Variable(_) => 0,
			TypeSignature::Parametrized {
				parameters,
				..
			} => 1 + parameters.iter().map(TypeSignature::structural_nodes).sum::<usize>(),
		}
	}

	/// Substitutes bound variables. Returns `None` if a variable has no binding.
	pub fn instantiate<'a>(&self, lookup: &impl Fn(&str) -> Option<&'a Type>) -> Option<Type> {
		match self {
			TypeSignature::Concrete(ty) => Some(ty.clone()),
			TypeSignature::Variable(name) => lookup(name).cloned(),
			TypeSignature::Parametrized {
				kind,
				parameters,
			} => {
				let mut types = parameters.iter().map(|p| p.instantiate(lookup)).collect::<Option<Vec<_>>>()?;
				match kind {
					ShapeKind::List => Some(Type::list(types.pop()?)),
					ShapeKind::Object => {
						let value = types.pop()?;
						let key = types.pop()?;
						Some(Type::object(key, value))
					}
				}
			}
		}
	}

	/// Textual form with variables renamed by first appearance across `seen`.
	///
	/// Two parameter lists with equal keys accept exactly the same argument types.
	pub fn shape_key(&self, seen: &mut Vec<String>) -> String {
		match self {
			TypeSignature::Concrete(ty) => ty.to_string(),
			TypeSignature::Variable(name) => {
				let position = match seen.iter().position(|s| s == name) {
					Some(position) => position,
					None => {
						seen.push(name.clone());
						seen.len() - 1
					}
				};
				format!("${}", position)
			}
			TypeSignature::Parametrized {
				kind,
				parameters,
			} => {
				let inner = parameters.iter().map(|p| p.shape_key(seen)).collect::<Vec<_>>().join(", ");
				format!("{}({})", kind, inner)
			}
		}
	}
}

impl From<Type> for TypeSignature {
	fn from(ty: Type) -> Self {
		TypeSignature::Concrete(ty)
	}
}

impl Display for TypeSignature {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TypeSignature::Concrete(ty) => Display::fmt(ty, f),
			TypeSignature::Variable(name) => f.write_str(name),
			TypeSignature::Parametrized {
				kind,
				parameters,
			} => {
				write!(f, "{}(", kind)?;
				for (idx, parameter) in parameters.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(parameter, f)?;
				}
				f.write_str(")")
			}
		}
	}
}

/// Parses the textual form of a type signature, e.g. `E`, `int4`, `object(K, list(V))`.
///
/// Scalar type names resolve to concrete types, `list` and `object` to parametrized
/// shapes; every other identifier is a type variable.
pub fn parse_type_signature(text: &str) -> crate::Result<TypeSignature> {
	let mut parser = Parser {
		text,
		chars: text.char_indices().peekable(),
	};
	let signature = parser.parse_signature()?;
	parser.skip_whitespace();
	if let Some((_, c)) = parser.chars.peek() {
		return_error!(invalid_type_signature(text, format!("unexpected '{}'", c)));
	}
	Ok(signature)
}

struct Parser<'a> {
	text: &'a str,
	chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
	fn parse_signature(&mut self) -> crate::Result<TypeSignature> {
		let name = self.parse_identifier()?;
		self.skip_whitespace();

		if !self.consume('(') {
			if let Some(ty) = Type::from_name(name) {
				return Ok(TypeSignature::Concrete(ty));
			}
			if let Some(kind) = ShapeKind::from_name(name) {
				return_error!(shape_arity_mismatch(self.text, kind, 0));
			}
			return Ok(TypeSignature::Variable(name.to_string()));
		}

		let mut parameters = vec![self.parse_signature()?];
		loop {
			self.skip_whitespace();
			if self.consume(',') {
				self.skip_whitespace();
				parameters.push(self.parse_signature()?);
			} else if self.consume(')') {
				break;
			} else {
				return_error!(invalid_type_signature(self.text, "expected ',' or ')'"));
			}
		}

		let Some(kind) = ShapeKind::from_name(name) else {
			return_error!(not_parametrized(self.text, name));
		};
		if kind.arity() != parameters.len() {
			return_error!(shape_arity_mismatch(self.text, kind, parameters.len()));
		}

		Ok(TypeSignature::Parametrized {
			kind,
			parameters,
		})
	}

	fn parse_identifier(&mut self) -> crate::Result<&'a str> {
		self.skip_whitespace();
		let start = match self.chars.peek() {
			Some(&(idx, c)) if c.is_ascii_alphabetic() || c == '_' => idx,
			Some(&(_, c)) => return_error!(invalid_type_signature(self.text, format!("unexpected '{}'", c))),
			None => return_error!(invalid_type_signature(self.text, "unexpected end of input")),
		};

		let mut end = start;
		while let Some(&(idx, c)) = self.chars.peek() {
			if c.is_ascii_alphanumeric() || c == '_' {
				end = idx + c.len_utf8();
				self.chars.next();
			} else {
				break;
			}
		}
		Ok(&self.text[start..end])
	}

	fn skip_whitespace(&mut self) {
		while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
	}

	fn consume(&mut self, expected: char) -> bool {
		self.chars.next_if(|&(_, c)| c == expected).is_some()
	}
}
