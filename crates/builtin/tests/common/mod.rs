// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_builtin::builtin_registry;
use reifydb_function::{ExecutionContext, FunctionRegistry};

pub fn init_logging() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
		)
		.with_test_writer()
		.try_init();
}

pub fn setup() -> (FunctionRegistry, ExecutionContext) {
	init_logging();
	let registry = builtin_registry().expect("built-in functions register");
	(registry, ExecutionContext::new())
}
