// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_arena::ArenaError;
use reifydb_hash::HashError;
use reifydb_value::{ValueDescr, ValueError};

use crate::arity::Arity;

/// Failure raised by a kernel while executing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("overflow computing {operation} of {value}")]
	Overflow {
		operation: &'static str,
		value: String,
	},

	#[error("invalid input: {reason}")]
	Invalid {
		reason: String,
	},

	#[error(transparent)]
	Arena(#[from] ArenaError),

	#[error(transparent)]
	Hash(#[from] HashError),

	#[error(transparent)]
	Value(#[from] ValueError),

	#[error("internal error: {details}")]
	Internal {
		details: String,
	},
}

impl FunctionError {
	pub fn invalid(reason: impl Into<String>) -> Self {
		FunctionError::Invalid {
			reason: reason.into(),
		}
	}

	pub fn internal(details: impl Into<String>) -> Self {
		FunctionError::Internal {
			details: details.into(),
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			FunctionError::Overflow {
				..
			} => "FUNCTION_011",
			FunctionError::Invalid {
				..
			} => "FUNCTION_007",
			FunctionError::Arena(err) => err.code(),
			FunctionError::Hash(err) => err.code(),
			FunctionError::Value(err) => err.code(),
			FunctionError::Internal {
				..
			} => "FUNCTION_008",
		}
	}
}

/// Failure registering a function or adding a kernel to it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterError {
	#[error("function {name} is already registered")]
	AlreadyRegistered {
		name: String,
	},

	#[error("kernel signature of {function} has {actual} inputs, function accepts {arity}")]
	SignatureArity {
		function: String,
		arity: Arity,
		actual: usize,
	},
}

impl RegisterError {
	pub fn code(&self) -> &'static str {
		match self {
			RegisterError::AlreadyRegistered {
				..
			} => "FUNCTION_012",
			RegisterError::SignatureArity {
				..
			} => "FUNCTION_013",
		}
	}
}

/// Failure of [`FunctionRegistry::call`](crate::FunctionRegistry::call).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallError {
	#[error("unknown function: {name}")]
	NotFound {
		name: String,
	},

	#[error("function {function} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		function: String,
		expected: Arity,
		actual: usize,
	},

	#[error("no kernel of function {function} matches ({})", join_descrs(.args))]
	NoMatchingKernel {
		function: String,
		args: Vec<ValueDescr>,
	},

	#[error("argument {index} of function {function}: {reason}")]
	InvalidArgumentShape {
		function: String,
		index: usize,
		reason: String,
	},

	#[error("function {function} failed: {source}")]
	KernelFailure {
		function: String,
		source: FunctionError,
	},
}

impl CallError {
	pub fn code(&self) -> &'static str {
		match self {
			CallError::NotFound {
				..
			} => "FUNCTION_001",
			CallError::ArityMismatch {
				..
			} => "FUNCTION_002",
			CallError::NoMatchingKernel {
				..
			} => "FUNCTION_004",
			CallError::InvalidArgumentShape {
				..
			} => "FUNCTION_010",
			CallError::KernelFailure {
				source,
				..
			} => source.code(),
		}
	}

	/// The kernel error behind a `KernelFailure`.
	pub fn kernel_error(&self) -> Option<&FunctionError> {
		match self {
			CallError::KernelFailure {
				source,
				..
			} => Some(source),
			_ => None,
		}
	}
}

fn join_descrs(args: &[ValueDescr]) -> String {
	args.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
	use reifydb_value::Type;

	use super::*;

	#[test]
	fn test_no_matching_kernel_message() {
		let err = CallError::NoMatchingKernel {
			function: "abs".to_string(),
			args: vec![ValueDescr::column(Type::Utf8), ValueDescr::scalar(Type::Int4)],
		};
		assert_eq!(err.to_string(), "no kernel of function abs matches (column UTF8, scalar INT4)");
		assert_eq!(err.code(), "FUNCTION_004");
	}

	#[test]
	fn test_kernel_failure_code_is_source_code() {
		let err = CallError::KernelFailure {
			function: "abs_checked".to_string(),
			source: FunctionError::Overflow {
				operation: "abs",
				value: "-128".to_string(),
			},
		};
		assert_eq!(err.code(), "FUNCTION_011");
		assert!(matches!(err.kernel_error(), Some(FunctionError::Overflow { .. })));
	}

	#[test]
	fn test_arity_message() {
		let err = CallError::ArityMismatch {
			function: "abs".to_string(),
			expected: Arity::unary(),
			actual: 2,
		};
		assert_eq!(err.to_string(), "function abs expects exactly 1 arguments, got 2");
	}
}
