// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::value::ValueKind;

/// Two values of kinds that have no common order were compared
pub fn incompatible_comparison(left: ValueKind, right: ValueKind) -> Diagnostic {
	Diagnostic {
		code: "COMPARE_001".to_string(),
		statement: None,
		message: format!("Cannot compare {} with {}", left, right),
		label: Some("incompatible operand kinds".to_string()),
		help: Some("This is likely a bug in type resolution, please report it".to_string()),
		notes: vec![
			"Operands of a comparison must have compatible types after function resolution".to_string(),
			"Numbers of any width compare with each other, all other kinds only with themselves".to_string(),
		],
		cause: None,
	}
}
