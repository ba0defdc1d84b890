// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::r#type::Type;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
	#[error("chunk {index} has type {actual}, chunked column expects {expected}")]
	ChunkTypeMismatch {
		index: usize,
		expected: Type,
		actual: Type,
	},

	#[error("column {index} has {actual} rows, expected {expected}")]
	ColumnLengthMismatch {
		index: usize,
		expected: usize,
		actual: usize,
	},

	#[error("column index {index} out of bounds for {len} columns")]
	ColumnIndexOutOfBounds {
		index: usize,
		len: usize,
	},

	#[error("{fields} fields declared for {columns} columns")]
	FieldCountMismatch {
		fields: usize,
		columns: usize,
	},

	#[error("field {name} declared as {declared}, column has type {actual}")]
	FieldTypeMismatch {
		name: String,
		declared: Type,
		actual: Type,
	},
}

impl ValueError {
	pub fn code(&self) -> &'static str {
		match self {
			ValueError::ChunkTypeMismatch {
				..
			} => "VALUE_001",
			ValueError::ColumnLengthMismatch {
				..
			} => "VALUE_002",
			ValueError::ColumnIndexOutOfBounds {
				..
			} => "VALUE_003",
			ValueError::FieldCountMismatch {
				..
			} => "VALUE_004",
			ValueError::FieldTypeMismatch {
				..
			} => "VALUE_005",
		}
	}
}
