// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
	#[error("scratch arena out of space: requested {requested} bytes, {remaining} remaining")]
	OutOfSpace {
		requested: usize,
		remaining: usize,
	},

	#[error("failed to allocate {requested} bytes of scratch memory")]
	AllocationFailure {
		requested: usize,
	},

	#[error("alignment {alignment} is not a power of two")]
	InvalidAlignment {
		alignment: usize,
	},
}

impl ArenaError {
	pub fn code(&self) -> &'static str {
		match self {
			ArenaError::OutOfSpace {
				..
			} => "ARENA_001",
			ArenaError::AllocationFailure {
				..
			} => "ARENA_002",
			ArenaError::InvalidAlignment {
				..
			} => "ARENA_003",
		}
	}
}
