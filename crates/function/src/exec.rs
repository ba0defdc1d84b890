// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Splits call arguments into kernel spans.

use reifydb_value::Datum;

use crate::{
	error::CallError,
	function::FunctionKind,
	kernel::{ExecSpan, ExecValue},
};

/// How a call's arguments are laid out for execution.
pub(crate) enum Layout<'a> {
	/// One kernel invocation over the arguments as given.
	Single(ExecSpan<'a>),
	/// One invocation per chunk; results are reassembled into a chunked column.
	Chunked(Vec<ExecSpan<'a>>),
}

pub(crate) fn layout<'a>(function: &str, kind: FunctionKind, args: &'a [Datum]) -> Result<Layout<'a>, CallError> {
	let mut values = Vec::with_capacity(args.len());
	for (index, arg) in args.iter().enumerate() {
		let value = ExecValue::from_datum(arg)
			.ok_or_else(|| shape_error(function, index, "record batches cannot be passed to a function"))?;
		values.push(value);
	}

	let any_chunked = values.iter().any(|v| matches!(v, ExecValue::Chunked(_)));
	if kind == FunctionKind::Aggregate || !any_chunked {
		let length = common_length(function, &values)?;
		return Ok(Layout::Single(ExecSpan::new(values, length)));
	}

	let mut chunk_lengths: Option<Vec<usize>> = None;
	for (index, value) in values.iter().enumerate() {
		match value {
			ExecValue::Scalar(_) => {}
			ExecValue::Column(_) => {
				return Err(shape_error(function, index, "plain column mixed with chunked columns"));
			}
			ExecValue::Chunked(chunked) => {
				let lengths = chunked.chunk_lengths();
				match &chunk_lengths {
					None => chunk_lengths = Some(lengths),
					Some(expected) if *expected == lengths => {}
					Some(_) => return Err(shape_error(function, index, "chunk layout differs from previous argument")),
				}
			}
		}
	}

	let chunk_lengths = chunk_lengths.unwrap_or_default();
	let spans = chunk_lengths
		.iter()
		.enumerate()
		.map(|(chunk, &length)| {
			let values = values
				.iter()
				.map(|value| match *value {
					ExecValue::Chunked(chunked) => ExecValue::Column(&chunked.chunks()[chunk]),
					other => other,
				})
				.collect();
			ExecSpan::new(values, Some(length))
		})
		.collect();

	Ok(Layout::Chunked(spans))
}

/// Row count shared by every column argument.
fn common_length(function: &str, values: &[ExecValue<'_>]) -> Result<Option<usize>, CallError> {
	let mut result = None;
	for (index, value) in values.iter().enumerate() {
		let len = match value {
			ExecValue::Scalar(_) => continue,
			ExecValue::Column(column) => column.len(),
			ExecValue::Chunked(chunked) => chunked.len(),
		};
		match result {
			None => result = Some(len),
			Some(expected) if expected == len => {}
			Some(expected) => {
				return Err(shape_error(function, index, &format!("has {len} rows, expected {expected}")));
			}
		}
	}
	Ok(result)
}

fn shape_error(function: &str, index: usize, reason: &str) -> CallError {
	CallError::InvalidArgumentShape {
		function: function.to_string(),
		index,
		reason: reason.to_string(),
	}
}
