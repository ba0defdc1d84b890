// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Built-in compute functions.
//!
//! - `abs` and `abs_checked`: absolute value with wrapping or checked overflow
//! - `hash32`: per element xxHash32 of a column
//! - `index`: position of the first occurrence of a value

use reifydb_function::{CallError, ExecutionContext, FunctionRegistry, RegisterError};
use reifydb_value::Datum;

pub mod hash;
pub mod index;
pub mod math;
mod null;
pub mod options;

pub use hash::HASH32;
pub use index::INDEX;
pub use math::abs::{ABS, ABS_CHECKED};
pub use options::{ArithmeticOptions, IndexOptions};

/// Registers every built-in function.
pub fn register_builtins(registry: &mut FunctionRegistry) -> Result<(), RegisterError> {
	registry.register(math::abs::abs_function()?)?;
	registry.register(math::abs::abs_checked_function()?)?;
	registry.register(hash::hash32_function()?)?;
	registry.register(index::index_function()?)?;
	Ok(())
}

/// A registry holding only the built-in functions.
pub fn builtin_registry() -> Result<FunctionRegistry, RegisterError> {
	let mut result = FunctionRegistry::new();
	register_builtins(&mut result)?;
	Ok(result)
}

/// Calls `abs_checked` when `options.check_overflow` is set, `abs` otherwise.
pub fn absolute_value(
	registry: &FunctionRegistry,
	arg: Datum,
	options: ArithmeticOptions,
	ctx: &ExecutionContext,
) -> Result<Datum, CallError> {
	let name = if options.check_overflow {
		ABS_CHECKED
	} else {
		ABS
	};
	registry.call(name, &[arg], Some(&options), ctx)
}

pub fn hash32(registry: &FunctionRegistry, arg: Datum, ctx: &ExecutionContext) -> Result<Datum, CallError> {
	registry.call(HASH32, &[arg], None, ctx)
}

pub fn index(
	registry: &FunctionRegistry,
	arg: Datum,
	options: IndexOptions,
	ctx: &ExecutionContext,
) -> Result<Datum, CallError> {
	registry.call(INDEX, &[arg], Some(&options), ctx)
}
