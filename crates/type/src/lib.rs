// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{Error, IntoDiagnostic, diagnostic::Diagnostic};
pub use value::{
	NULLS_ORDER, NullsOrder, OrderedF32, OrderedF64, Value, ValueKind,
	compare::{compare, compare_with, try_compare},
	r#type::{
		ShapeKind, Type,
		signature::{TypeSignature, parse_type_signature},
	},
};

pub type Result<T> = std::result::Result<T, Error>;
