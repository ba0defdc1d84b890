// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use reifydb_value::Datum;
use tracing::{debug, instrument, warn};

use crate::{
	context::ExecutionContext,
	error::{CallError, RegisterError},
	function::Function,
	options::FunctionOptions,
};

/// Name to function mapping.
///
/// Registration happens during a single threaded setup phase; afterwards the
/// registry is only read, so `&FunctionRegistry` can be shared freely.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
	functions: IndexMap<String, Function>,
}

impl FunctionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `function`; a name collision is rejected and leaves the registry unchanged.
	#[instrument(name = "function::registry::register", level = "debug", skip_all, fields(name = function.name()))]
	pub fn register(&mut self, function: Function) -> Result<(), RegisterError> {
		if self.functions.contains_key(function.name()) {
			warn!("function already registered");
			return Err(RegisterError::AlreadyRegistered {
				name: function.name().to_string(),
			});
		}
		debug!(kernels = function.kernels().len(), kind = %function.kind(), "function registered");
		self.functions.insert(function.name().to_string(), function);
		Ok(())
	}

	pub fn lookup(&self, name: &str) -> Option<&Function> {
		self.functions.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.functions.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.functions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.functions.is_empty()
	}

	/// Registered names, in registration order.
	pub fn function_names(&self) -> impl Iterator<Item = &str> {
		self.functions.keys().map(String::as_str)
	}

	#[instrument(name = "function::registry::call", level = "debug", skip(self, args, options, ctx), fields(args = args.len()))]
	pub fn call(
		&self,
		name: &str,
		args: &[Datum],
		options: Option<&dyn FunctionOptions>,
		ctx: &ExecutionContext,
	) -> Result<Datum, CallError> {
		let function = self.lookup(name).ok_or_else(|| CallError::NotFound {
			name: name.to_string(),
		})?;
		function.execute(args, options, ctx)
	}
}
