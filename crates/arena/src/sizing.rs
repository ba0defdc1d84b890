// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Rows per mini-batch, the unit scratch buffers are sized for.
pub const MINI_BATCH_LEN: usize = 1024;

pub const SCRATCH_BYTES_PER_ROW: usize = 64;

/// Arena capacity for a fixed width input of `row_count` rows.
pub fn capacity_for_fixed_width(row_count: usize, bytes_per_row: usize) -> usize {
	bytes_per_row.saturating_mul(row_count.min(MINI_BATCH_LEN))
}

/// Arena capacity for a variable width input whose first mini-batch holds
/// `first_batch_bytes` payload bytes.
pub fn capacity_for_variable_width(first_batch_bytes: usize, bytes_per_row: usize) -> usize {
	bytes_per_row.saturating_mul(first_batch_bytes)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_width() {
		assert_eq!(capacity_for_fixed_width(0, SCRATCH_BYTES_PER_ROW), 0);
		assert_eq!(capacity_for_fixed_width(5, SCRATCH_BYTES_PER_ROW), 320);
		assert_eq!(capacity_for_fixed_width(1024, SCRATCH_BYTES_PER_ROW), 65536);
		assert_eq!(capacity_for_fixed_width(1_000_000, SCRATCH_BYTES_PER_ROW), 65536);
	}

	#[test]
	fn test_variable_width() {
		assert_eq!(capacity_for_variable_width(10, SCRATCH_BYTES_PER_ROW), 640);
		assert_eq!(capacity_for_variable_width(usize::MAX, 2), usize::MAX);
	}
}
