// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::slice;

use reifydb_function::{
	Arity, ExecSpan, ExecValue, Function, FunctionDoc, FunctionError, InputSignature, Kernel, KernelContext,
	RegisterError,
};
use reifydb_value::{ColumnData, Datum, NativeType, Type, Value, VarContainer};
use tracing::trace;

use crate::options::IndexOptions;

pub const INDEX: &str = "index";

pub fn index_function() -> Result<Function, RegisterError> {
	let mut result = Function::aggregate(
		INDEX,
		Arity::unary(),
		FunctionDoc::new(
			"Position of a value",
			"Returns the position of the first defined element equal to IndexOptions::value as an INT8, or -1 when it does not occur.",
			["values"],
		),
	);
	for ty in Type::all() {
		result.add_kernel(Kernel::new(InputSignature::column(*ty), Type::Int8, index_exec))?;
	}
	Ok(result)
}

fn index_exec(ctx: &mut KernelContext<'_>, span: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
	let options = ctx.require_options::<IndexOptions>()?;
	let arg = span.value(0)?;
	let chunks: &[ColumnData] = match arg {
		ExecValue::Column(column) => slice::from_ref(column),
		ExecValue::Chunked(chunked) => chunked.chunks(),
		ExecValue::Scalar(_) => return Err(FunctionError::internal("index kernel expects a column argument")),
	};

	let target = &options.value;
	let ty = arg.descr().ty;
	if !target.is_undefined() && target.get_type() != ty {
		return Err(FunctionError::invalid(format!(
			"index of {} value in {} column",
			target.get_type(),
			ty
		)));
	}

	let mut offset = 0usize;
	let mut position = None;
	if !target.is_undefined() {
		for chunk in chunks {
			if let Some(found) = find(chunk, target) {
				position = Some(offset + found);
				break;
			}
			offset += chunk.len();
		}
	}
	trace!(?position, chunks = chunks.len(), "index searched");

	*out = Datum::Scalar(Value::Int8(position.map_or(-1, |p| p as i64)));
	Ok(())
}

/// Position of the first defined slot of `chunk` equal to `target`.
fn find(chunk: &ColumnData, target: &Value) -> Option<usize> {
	match chunk {
		ColumnData::Undefined(_) => None,
		ColumnData::Boolean(_) => find_fixed::<bool>(chunk, target),
		ColumnData::Int1(_) => find_fixed::<i8>(chunk, target),
		ColumnData::Int2(_) => find_fixed::<i16>(chunk, target),
		ColumnData::Int4(_) => find_fixed::<i32>(chunk, target),
		ColumnData::Int8(_) => find_fixed::<i64>(chunk, target),
		ColumnData::Uint1(_) => find_fixed::<u8>(chunk, target),
		ColumnData::Uint2(_) => find_fixed::<u16>(chunk, target),
		ColumnData::Uint4(_) => find_fixed::<u32>(chunk, target),
		ColumnData::Uint8(_) => find_fixed::<u64>(chunk, target),
		ColumnData::Float4(_) => find_fixed::<f32>(chunk, target),
		ColumnData::Float8(_) => find_fixed::<f64>(chunk, target),
		ColumnData::Utf8(container) => match target {
			Value::Utf8(s) => find_var(container, s.as_bytes()),
			_ => None,
		},
		ColumnData::Blob(container) => match target {
			Value::Blob(b) => find_var(container, b),
			_ => None,
		},
	}
}

fn find_fixed<T: NativeType>(chunk: &ColumnData, target: &Value) -> Option<usize> {
	let container = T::container(chunk)?;
	let target = T::from_value(target)?;
	(0..container.len()).find(|&i| container.is_defined(i) && container[i] == target)
}

fn find_var(container: &VarContainer, target: &[u8]) -> Option<usize> {
	(0..container.len()).find(|&i| container.get(i) == Some(target))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_find_skips_undefined() {
		let chunk = ColumnData::int4_with_bitvec(vec![7, 7, 3], vec![false, true, true]);
		assert_eq!(find(&chunk, &Value::Int4(7)), Some(1));
		assert_eq!(find(&chunk, &Value::Int4(4)), None);
	}

	#[test]
	fn test_find_var() {
		let chunk = ColumnData::utf8_options([Some("a"), None, Some("b")]);
		assert_eq!(find(&chunk, &Value::utf8("b")), Some(2));
		assert_eq!(find(&chunk, &Value::utf8("")), None);
	}

	#[test]
	fn test_find_nan_never_matches() {
		let chunk = ColumnData::float8(vec![f64::NAN, 1.0]);
		assert_eq!(find(&chunk, &Value::Float8(f64::NAN)), None);
		assert_eq!(find(&chunk, &Value::Float8(1.0)), Some(1));
	}
}
