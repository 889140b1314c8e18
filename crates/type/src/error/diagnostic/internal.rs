// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

/// Diagnostic for a broken internal invariant, tagged with the place it was detected.
///
/// Use through [`internal_error!`](crate::internal_error) so the location is filled in.
pub fn internal_with_context(reason: impl Into<String>, file: &str, line: u32, function: &str) -> Diagnostic {
	let source = file.rsplit('/').next().unwrap_or(file);
	let error_id = format!("ERR-{}:{}", source.trim_end_matches(".rs"), line);

	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: format!("Internal error [{}]: {}", error_id, reason.into()),
		label: Some(format!("invariant violated in {} ({}:{})", function, file, line)),
		help: Some(format!(
			"This indicates a bug in polyfn {}. Please report it together with error id {}",
			env!("CARGO_PKG_VERSION"),
			error_id
		)),
		notes: vec![],
		cause: None,
	}
}

#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::error::diagnostic::internal_with_context($reason, file!(), line!(), {
			fn f() {}
			fn type_name_of<T>(_: T) -> &'static str {
				std::any::type_name::<T>()
			}
			let name = type_name_of(f);
			&name[..name.len() - 3]
		})
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::internal_error!(format!($fmt, $($arg)*))
	};
}

#[macro_export]
macro_rules! return_internal_error {
	($($arg:tt)*) => {
		return Err($crate::error::Error($crate::internal_error!($($arg)*)))
	};
}
