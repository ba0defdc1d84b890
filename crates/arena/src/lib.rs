// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Stack discipline scratch memory for compute kernels.
//!
//! A [`ScratchArena`] is initialized once per logical batch, hands out aligned
//! regions by advancing a cursor and is rewound with [`ScratchArena::reset`].
//! Its capacity is reserved from a [`MemoryPool`].

mod error;
mod pool;
mod scratch;
mod sizing;

pub use error::ArenaError;
pub use pool::{MemoryPool, SystemMemoryPool, default_memory_pool};
pub use scratch::ScratchArena;
pub use sizing::{MINI_BATCH_LEN, SCRATCH_BYTES_PER_ROW, capacity_for_fixed_width, capacity_for_variable_width};

pub type Result<T> = std::result::Result<T, ArenaError>;
