// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_arena::ArenaError;
use reifydb_value::ValueError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
	#[error("no columns to hash")]
	NoColumns,

	#[error("column {column} has {actual} rows, expected {expected}")]
	RowCountMismatch {
		column: usize,
		expected: usize,
		actual: usize,
	},

	#[error("output buffer holds {actual} hashes, expected {expected}")]
	OutputLengthMismatch {
		expected: usize,
		actual: usize,
	},

	#[error(transparent)]
	Arena(#[from] ArenaError),

	#[error(transparent)]
	Value(#[from] ValueError),
}

impl HashError {
	pub fn code(&self) -> &'static str {
		match self {
			HashError::NoColumns => "HASH_001",
			HashError::RowCountMismatch {
				..
			} => "HASH_002",
			HashError::OutputLengthMismatch {
				..
			} => "HASH_003",
			HashError::Arena(err) => err.code(),
			HashError::Value(err) => err.code(),
		}
	}
}
