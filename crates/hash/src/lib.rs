// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! 32-bit row hashes over one or more typed columns.
//!
//! [`HashEngine`] hashes each column's elements with xxHash32, combines the
//! per-column hashes row by row and borrows its intermediate buffer from a
//! [`ScratchArena`](reifydb_arena::ScratchArena).

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod column;
mod engine;
mod error;
mod hardware;
pub mod xxh;

pub use column::{TypedBuffer, TypedColumn};
pub use engine::{HashEngine, NULL_HASH, combine_hashes};
pub use error::HashError;
pub use hardware::HardwareFlags;
pub use xxh::xxh32;

pub type Result<T> = std::result::Result<T, HashError>;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash32(pub u32);

impl From<Hash32> for u32 {
	fn from(hash: Hash32) -> Self {
		hash.0
	}
}

impl Display for Hash32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:08x}", self.0)
	}
}
