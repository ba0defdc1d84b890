// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::Hash32;

pub(crate) mod lanes;

#[inline(always)]
pub fn xxh32(data: &[u8], seed: u32) -> Hash32 {
	Hash32(xxhash_rust::xxh32::xxh32(data, seed))
}
