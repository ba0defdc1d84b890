// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_arena::{MINI_BATCH_LEN, ScratchArena, capacity_for_fixed_width, capacity_for_variable_width};
use reifydb_function::{
	Arity, ExecSpan, Function, FunctionDoc, FunctionError, InputSignature, Kernel, KernelContext, RegisterError,
};
use reifydb_hash::{HashEngine, TypedColumn};
use reifydb_value::{ColumnData, Datum, Type};
use tracing::{debug, instrument, trace};

pub const HASH32: &str = "hash32";

pub fn hash32_function() -> Result<Function, RegisterError> {
	let mut result = Function::scalar(
		HASH32,
		Arity::unary(),
		FunctionDoc::new(
			"32-bit hash",
			"Returns the xxHash32 of each element as a UINT4 column. Undefined elements hash to 0.",
			["x"],
		),
	);
	for ty in Type::all() {
		result.add_kernel(Kernel::new(InputSignature::column(*ty), Type::Uint4, hash32_exec))?;
	}
	Ok(result)
}

/// Arena capacity for hashing `column`, sized from its first mini-batch.
pub(crate) fn scratch_capacity(column: &TypedColumn<'_>, bytes_per_row: usize) -> usize {
	let fixed = capacity_for_fixed_width(column.len(), bytes_per_row);
	if column.is_variable_width() {
		let first_batch = column.byte_len(0, column.len().min(MINI_BATCH_LEN));
		fixed.max(capacity_for_variable_width(first_batch, bytes_per_row))
	} else {
		fixed
	}
}

#[instrument(name = "builtin::hash::hash32", level = "debug", skip_all, fields(rows = span.length()))]
fn hash32_exec(ctx: &mut KernelContext<'_>, span: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
	let column = span
		.value(0)?
		.as_column()
		.ok_or_else(|| FunctionError::internal("hash32 kernel expects a column argument"))?;
	let typed = TypedColumn::new(column);

	let exec = ctx.exec_context();
	let capacity = scratch_capacity(&typed, exec.config().scratch_bytes_per_row);
	let mut arena = ScratchArena::with_capacity(exec.memory_pool().clone(), capacity)?;
	debug!(ty = %typed.get_type(), capacity, "scratch arena ready");

	let hint = exec.hardware_hint();
	let hashes = HashEngine::hash_columns(&[typed], &mut arena, hint)?;
	trace!(hashes = hashes.len(), avx2 = hint.use_avx2(), "hashed");

	*out = Datum::Column(ColumnData::uint4(hashes));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scratch_capacity_fixed() {
		let data = ColumnData::int4(vec![0; 10]);
		assert_eq!(scratch_capacity(&TypedColumn::new(&data), 64), 640);

		let data = ColumnData::int4(vec![0; 5000]);
		assert_eq!(scratch_capacity(&TypedColumn::new(&data), 64), 64 * 1024);
	}

	#[test]
	fn test_scratch_capacity_variable() {
		let data = ColumnData::utf8(["abcdefgh", "ijklmnop"]);
		assert_eq!(scratch_capacity(&TypedColumn::new(&data), 64), 64 * 16);

		let data = ColumnData::utf8(["", "", ""]);
		assert_eq!(scratch_capacity(&TypedColumn::new(&data), 64), 64 * 3);
	}

	#[test]
	fn test_kernel_per_type() {
		let function = hash32_function().unwrap();
		assert_eq!(function.kernels().len(), Type::all().len());
		assert!(function.kernels().iter().all(|k| k.output() == Type::Uint4));
	}
}
