// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::value::r#type::ShapeKind;

/// Type signature text could not be parsed
pub fn invalid_type_signature(text: &str, reason: impl Into<String>) -> Diagnostic {
	let reason = reason.into();
	Diagnostic {
		code: "SIGNATURE_001".to_string(),
		statement: None,
		message: format!("Invalid type signature '{}': {}", text, reason),
		label: Some("malformed type signature".to_string()),
		help: Some("Use a type name, a type variable or a shape such as list(T) or object(K, V)".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Parametrized shape declared with the wrong number of parameters
pub fn shape_arity_mismatch(text: &str, shape: ShapeKind, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "SIGNATURE_002".to_string(),
		statement: None,
		message: format!(
			"Invalid type signature '{}': {} expects {} type parameters, got {}",
			text,
			shape,
			shape.arity(),
			actual
		),
		label: Some("wrong number of type parameters".to_string()),
		help: Some(format!("Declare exactly {} type parameters for {}", shape.arity(), shape)),
		notes: vec![],
		cause: None,
	}
}

/// Scalar type name used with type parameters
pub fn not_parametrized(text: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "SIGNATURE_003".to_string(),
		statement: None,
		message: format!("Invalid type signature '{}': {} does not take type parameters", text, name),
		label: Some("unexpected type parameters".to_string()),
		help: Some("Only list and object accept type parameters".to_string()),
		notes: vec![],
		cause: None,
	}
}
