// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem::size_of;

use reifydb_arena::{MINI_BATCH_LEN, ScratchArena};
use reifydb_value::{NativeType, RecordBatch};
use tracing::{debug, instrument, trace};

use crate::{
	HardwareFlags, HashError, Result,
	column::{TypedBuffer, TypedColumn},
	xxh::{lanes, xxh32},
};

/// Hash of an undefined slot.
pub const NULL_HASH: u32 = 0;

/// Folds `hash` into the running row hash `acc`.
#[inline(always)]
pub fn combine_hashes(acc: u32, hash: u32) -> u32 {
	acc ^ hash.wrapping_add(0x9e3779b9).wrapping_add(acc << 6).wrapping_add(acc >> 2)
}

/// Computes one 32-bit hash per row across a set of columns.
///
/// Each column contributes the xxHash32 (seed 0) of its element's little
/// endian bytes, or [`NULL_HASH`] for undefined slots, and contributions are
/// combined left to right with [`combine_hashes`]. The result depends only on
/// the input bytes and column order, never on the hardware path taken.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashEngine;

impl HashEngine {
	/// Scratch bytes one call over `row_count` rows borrows from the arena.
	pub fn scratch_bytes(row_count: usize) -> usize {
		size_of::<u32>() * row_count.min(MINI_BATCH_LEN)
	}

	pub fn hash_columns(columns: &[TypedColumn<'_>], arena: &mut ScratchArena, hint: HardwareFlags) -> Result<Vec<u32>> {
		let row_count = columns.first().map(TypedColumn::len).ok_or(HashError::NoColumns)?;
		let mut result = vec![0u32; row_count];
		Self::hash_columns_into(columns, arena, hint, &mut result)?;
		Ok(result)
	}

	/// Writes one hash per row into `out`.
	///
	/// The arena must have room for [`scratch_bytes`](Self::scratch_bytes);
	/// on any error neither the arena nor `out` is modified.
	#[instrument(name = "hash::engine::hash_columns", level = "trace", skip_all, fields(columns = columns.len(), rows = out.len()))]
	pub fn hash_columns_into(
		columns: &[TypedColumn<'_>],
		arena: &mut ScratchArena,
		hint: HardwareFlags,
		out: &mut [u32],
	) -> Result<()> {
		let row_count = columns.first().map(TypedColumn::len).ok_or(HashError::NoColumns)?;
		for (index, column) in columns.iter().enumerate() {
			if column.len() != row_count {
				return Err(HashError::RowCountMismatch {
					column: index,
					expected: row_count,
					actual: column.len(),
				});
			}
		}
		if out.len() != row_count {
			return Err(HashError::OutputLengthMismatch {
				expected: row_count,
				actual: out.len(),
			});
		}

		let scratch = arena.alloc_slice::<u32>(row_count.min(MINI_BATCH_LEN))?;
		let avx2 = hint.use_avx2();
		debug!(rows = row_count, columns = columns.len(), avx2, "hashing columns");

		let mut start = 0;
		while start < row_count {
			let len = (row_count - start).min(MINI_BATCH_LEN);
			let scratch = &mut scratch[..len];
			let out = &mut out[start..start + len];

			for (index, column) in columns.iter().enumerate() {
				hash_column(column, start, scratch, avx2);
				if index == 0 {
					out.copy_from_slice(scratch);
				} else {
					for (acc, hash) in out.iter_mut().zip(scratch.iter()) {
						*acc = combine_hashes(*acc, *hash);
					}
				}
			}

			trace!(start, len, "mini-batch hashed");
			start += len;
		}

		Ok(())
	}

	/// Hashes the columns of `batch` at `indices`, in that order.
	pub fn hash_batch(
		batch: &RecordBatch,
		indices: &[usize],
		arena: &mut ScratchArena,
		hint: HardwareFlags,
	) -> Result<Vec<u32>> {
		let columns: Vec<TypedColumn<'_>> =
			batch.select_columns(indices)?.into_iter().map(TypedColumn::new).collect();
		Self::hash_columns(&columns, arena, hint)
	}
}

/// Hashes rows `start..start + out.len()` of `column` into `out`.
fn hash_column(column: &TypedColumn<'_>, start: usize, out: &mut [u32], avx2: bool) {
	let end = start + out.len();
	match column.buffer() {
		TypedBuffer::Boolean(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Int1(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Int2(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Int4(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Int8(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Uint1(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Uint2(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Uint4(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Uint8(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Float4(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Float8(values) => hash_fixed(&values[start..end], out, avx2),
		TypedBuffer::Variable {
			offsets,
			values,
		} => {
			for (row, hash) in (start..end).zip(out.iter_mut()) {
				let bytes = &values[offsets[row]..offsets[row + 1]];
				*hash = xxh32(bytes, 0).0;
			}
		}
		TypedBuffer::Null => {
			out.fill(NULL_HASH);
			return;
		}
	}

	if let Some(validity) = column.validity() {
		for (row, hash) in (start..end).zip(out.iter_mut()) {
			if !validity.get(row) {
				*hash = NULL_HASH;
			}
		}
	}
}

fn hash_fixed<T: NativeType>(values: &[T], out: &mut [u32], avx2: bool) {
	#[cfg(target_arch = "x86_64")]
	{
		if avx2 {
			// SAFETY: `avx2` is only set when the running CPU supports it.
			unsafe { lanes::hash_fixed_avx2(values, out) };
			return;
		}
	}
	#[cfg(not(target_arch = "x86_64"))]
	let _ = avx2;

	for (value, hash) in values.iter().zip(out.iter_mut()) {
		*hash = xxh32(&value.key_bytes()[..size_of::<T>()], 0).0;
	}
}
