// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Registry of scalar function overloads.
//!
//! Functions are registered through a [`FunctionsBuilder`] and frozen into an
//! immutable [`Functions`] registry. The registry is cheap to clone and safe to
//! resolve against from many threads at once.

use std::{
	collections::HashMap,
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use polyfn_type::{Type, return_error, return_internal_error};
use tracing::{debug, instrument, warn};

use crate::{
	FunctionIdent, FunctionInfo, ScalarFunction,
	error::FunctionError,
	operator,
	signature::{
		Signature, Specificity,
		bind::{Binding, bind},
	},
};

type Factory = Box<dyn Fn(&Signature, FunctionInfo) -> Arc<dyn ScalarFunction> + Send + Sync>;

struct FunctionEntry {
	signature: Signature,
	factory: Factory,
}

#[derive(Clone)]
pub struct Functions(Arc<FunctionsInner>);

struct FunctionsInner {
	/// Overloads by function name, in registration order
	scalars: HashMap<String, Vec<FunctionEntry>>,
}

impl Functions {
	pub fn builder() -> FunctionsBuilder {
		FunctionsBuilder::new()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.scalars.contains_key(name)
	}

	/// Registered signatures of `name`, in registration order
	pub fn signatures(&self, name: &str) -> impl Iterator<Item = &Signature> {
		self.0.scalars.get(name).into_iter().flatten().map(|entry| &entry.signature)
	}

	/// Resolves `name` for the given argument types and creates the bound instance.
	///
	/// Among all overloads whose signature binds, the most specific one wins; ties
	/// go to the earliest registration.
	#[instrument(name = "function::resolve", level = "trace", skip(self))]
	pub fn resolve(&self, name: &str, arguments: &[Type]) -> crate::Result<Arc<dyn ScalarFunction>> {
		let Some(entries) = self.0.scalars.get(name) else {
			return_error!(FunctionError::UnknownFunction {
				name: name.to_string(),
			});
		};

		let mut best: Option<(&FunctionEntry, Binding, Specificity)> = None;
		for entry in entries {
			let Some(binding) = bind(&entry.signature, arguments) else {
				continue;
			};
			let specificity = entry.signature.specificity();
			match &best {
				Some((_, _, current)) if *current <= specificity => {}
				_ => best = Some((entry, binding, specificity)),
			}
		}

		let Some((entry, binding, _)) = best else {
			return_error!(FunctionError::NoMatchingSignature {
				name: name.to_string(),
				arguments: arguments.to_vec(),
				candidates: entries.iter().map(|e| e.signature.to_string()).collect(),
			});
		};

		let Some(return_type) = binding.apply(entry.signature.return_type()) else {
			return_internal_error!(
				"return type {} of {} cannot be instantiated",
				entry.signature.return_type(),
				entry.signature
			);
		};

		debug!(function = name, signature = %entry.signature, return_type = %return_type, "resolved function");

		let info = FunctionInfo::new(FunctionIdent::new(name, arguments.to_vec()), return_type);
		Ok((entry.factory)(&entry.signature, info))
	}
}

impl Debug for Functions {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let mut names = self.0.scalars.keys().collect::<Vec<_>>();
		names.sort();
		f.debug_struct("Functions").field("scalars", &names).finish()
	}
}

/// Collects registrations before they are validated and frozen.
#[derive(Default)]
pub struct FunctionsBuilder {
	scalars: Vec<FunctionEntry>,
}

impl FunctionsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers one overload. `factory` creates an instance per resolution from
	/// the declared signature and the resolved function info.
	pub fn register_scalar<F, S>(mut self, signature: Signature, factory: F) -> Self
	where
		F: Fn(&Signature, FunctionInfo) -> S + Send + Sync + 'static,
		S: ScalarFunction + 'static,
	{
		self.scalars.push(FunctionEntry {
			signature,
			factory: Box::new(move |signature, info| Arc::new(factory(signature, info)) as Arc<dyn ScalarFunction>),
		});
		self
	}

	/// Applies a registration pass, e.g. [`operator::register`]
	pub fn configure<F>(self, configurator: F) -> Self
	where
		F: FnOnce(FunctionsBuilder) -> FunctionsBuilder,
	{
		configurator(self)
	}

	/// Validates all registrations and freezes the registry.
	///
	/// Fails if a signature uses an undeclared type variable, leaves a return type
	/// variable unbound, or repeats the parameter shape of an earlier overload.
	#[instrument(name = "function::registry::build", level = "debug", skip(self), fields(registrations = self.scalars.len()))]
	pub fn build(self) -> crate::Result<Functions> {
		let mut scalars: HashMap<String, Vec<FunctionEntry>> = HashMap::new();
		let mut shape_keys: HashMap<(String, String), String> = HashMap::new();

		for entry in self.scalars {
			entry.signature.validate()?;

			let name = entry.signature.name().to_string();
			let key = (name.clone(), entry.signature.shape_key());
			if let Some(existing) = shape_keys.get(&key) {
				warn!(function = %name, signature = %entry.signature, existing = %existing, "duplicate function registration");
				return_error!(FunctionError::DuplicateRegistration {
					name,
					parameters: key.1,
					existing: existing.clone(),
				});
			}
			shape_keys.insert(key, entry.signature.to_string());

			scalars.entry(name).or_default().push(entry);
		}

		debug!(functions = scalars.len(), "function registry built");
		Ok(Functions(Arc::new(FunctionsInner {
			scalars,
		})))
	}
}

/// Builder with every function this crate ships
pub fn builtin() -> FunctionsBuilder {
	FunctionsBuilder::new().configure(operator::register)
}
