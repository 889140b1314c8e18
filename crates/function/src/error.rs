// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use polyfn_type::{Diagnostic, IntoDiagnostic, Type};

fn join_types(types: &[Type]) -> String {
	types.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
	#[error("Unknown function: {name}")]
	UnknownFunction {
		name: String,
	},

	#[error("Function {name} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("No signature of {name} accepts ({})", join_types(.arguments))]
	NoMatchingSignature {
		name: String,
		arguments: Vec<Type>,
		candidates: Vec<String>,
	},

	#[error("Function {name} registered twice with parameters {parameters}")]
	DuplicateRegistration {
		name: String,
		parameters: String,
		existing: String,
	},

	#[error("Signature {signature} uses undeclared type variable {variable}")]
	UndeclaredTypeVariable {
		signature: String,
		variable: String,
	},

	#[error("Return type of {signature} uses type variable {variable} which no argument binds")]
	UnboundReturnVariable {
		signature: String,
		variable: String,
	},
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			FunctionError::UnknownFunction {
				name,
			} => Diagnostic {
				code: "FUNCTION_001".to_string(),
				statement: None,
				message,
				label: Some(format!("function {} does not exist", name)),
				help: Some("Check the function name and make sure it is registered".to_string()),
				notes: vec![],
				cause: None,
			},
			FunctionError::ArityMismatch {
				name,
				expected,
				actual,
			} => Diagnostic {
				code: "FUNCTION_002".to_string(),
				statement: None,
				message,
				label: Some(format!("{} called with {} arguments", name, actual)),
				help: Some(format!("Provide exactly {} arguments to {}", expected, name)),
				notes: vec![],
				cause: None,
			},
			FunctionError::NoMatchingSignature {
				name,
				arguments,
				candidates,
			} => Diagnostic {
				code: "FUNCTION_003".to_string(),
				statement: None,
				message,
				label: Some(format!("no overload of {} for ({})", name, join_types(&arguments))),
				help: Some("Cast the arguments to types accepted by one of the registered signatures".to_string()),
				notes: candidates.into_iter().map(|c| format!("candidate: {}", c)).collect(),
				cause: None,
			},
			FunctionError::DuplicateRegistration {
				name,
				existing,
				..
			} => Diagnostic {
				code: "FUNCTION_004".to_string(),
				statement: None,
				message,
				label: Some(format!("{} already registered", name)),
				help: Some("Remove one of the registrations or change its parameter types".to_string()),
				notes: vec![format!("existing signature: {}", existing)],
				cause: None,
			},
			FunctionError::UndeclaredTypeVariable {
				variable,
				..
			} => Diagnostic {
				code: "FUNCTION_005".to_string(),
				statement: None,
				message,
				label: Some(format!("type variable {} is not declared", variable)),
				help: Some("Declare every type variable as a constraint of the signature".to_string()),
				notes: vec![],
				cause: None,
			},
			FunctionError::UnboundReturnVariable {
				variable,
				..
			} => Diagnostic {
				code: "FUNCTION_006".to_string(),
				statement: None,
				message,
				label: Some(format!("type variable {} cannot be inferred", variable)),
				help: Some("Use the type variable in at least one argument".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use polyfn_type::{Error, Type};

	use super::FunctionError;

	#[test]
	fn test_unknown_function_code() {
		let err: Error = FunctionError::UnknownFunction {
			name: "op_~".to_string(),
		}
		.into();
		assert_eq!(err.code(), "FUNCTION_001");
		assert!(err.message.contains("op_~"));
	}

	#[test]
	fn test_no_matching_signature_lists_arguments_and_candidates() {
		let err: Error = FunctionError::NoMatchingSignature {
			name: "op_=".to_string(),
			arguments: vec![Type::Int4, Type::Utf8],
			candidates: vec!["op_=(E, E):boolean".to_string()],
		}
		.into();
		assert_eq!(err.code(), "FUNCTION_003");
		assert_eq!(err.message, "No signature of op_= accepts (int4, utf8)");
		assert_eq!(err.notes, vec!["candidate: op_=(E, E):boolean".to_string()]);
	}
}
