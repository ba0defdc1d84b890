// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_value::{ChunkedColumn, ColumnData, Datum, Type, Value, ValueDescr};

use crate::{
	context::ExecutionContext,
	error::FunctionError,
	options::{FunctionOptions, downcast},
	signature::InputSignature,
};

/// Entry point of a kernel: reads the span, writes the result into the output slot.
pub type KernelExec = fn(&mut KernelContext<'_>, &ExecSpan<'_>, &mut Datum) -> Result<(), FunctionError>;

/// A type and shape specialized implementation of one function.
#[derive(Debug, Clone)]
pub struct Kernel {
	signature: InputSignature,
	output: Type,
	exec: KernelExec,
}

impl Kernel {
	pub fn new(signature: InputSignature, output: Type, exec: KernelExec) -> Self {
		Self {
			signature,
			output,
			exec,
		}
	}

	pub fn signature(&self) -> &InputSignature {
		&self.signature
	}

	pub fn output(&self) -> Type {
		self.output
	}

	pub fn matches(&self, args: &[ValueDescr]) -> bool {
		self.signature.matches(args)
	}

	pub fn exec(&self, ctx: &mut KernelContext<'_>, span: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
		(self.exec)(ctx, span, out)
	}
}

pub struct KernelContext<'a> {
	function: &'a str,
	exec_context: &'a ExecutionContext,
	options: Option<&'a dyn FunctionOptions>,
}

impl<'a> KernelContext<'a> {
	pub fn new(function: &'a str, exec_context: &'a ExecutionContext, options: Option<&'a dyn FunctionOptions>) -> Self {
		Self {
			function,
			exec_context,
			options,
		}
	}

	pub fn function(&self) -> &'a str {
		self.function
	}

	pub fn exec_context(&self) -> &'a ExecutionContext {
		self.exec_context
	}

	/// The call's options if they are of type `T`.
	pub fn options<T: FunctionOptions>(&self) -> Option<&'a T> {
		self.options.and_then(downcast::<T>)
	}

	pub fn require_options<T: FunctionOptions>(&self) -> Result<&'a T, FunctionError> {
		self.options::<T>().ok_or_else(|| {
			FunctionError::invalid(format!("{} requires {}", self.function, std::any::type_name::<T>()))
		})
	}
}

static UNDEFINED: Value = Value::Undefined;

/// One argument as seen by a kernel.
#[derive(Debug, Clone, Copy)]
pub enum ExecValue<'a> {
	Scalar(&'a Value),
	Column(&'a ColumnData),
	Chunked(&'a ChunkedColumn),
}

impl<'a> ExecValue<'a> {
	/// `None` for record batches, which kernels never see.
	pub fn from_datum(datum: &'a Datum) -> Option<Self> {
		match datum {
			Datum::Null => Some(ExecValue::Scalar(&UNDEFINED)),
			Datum::Scalar(value) => Some(ExecValue::Scalar(value)),
			Datum::Column(column) => Some(ExecValue::Column(column)),
			Datum::ChunkedColumn(chunked) => Some(ExecValue::Chunked(chunked)),
			Datum::RecordBatch(_) => None,
		}
	}

	pub fn descr(&self) -> ValueDescr {
		match self {
			ExecValue::Scalar(value) => ValueDescr::scalar(value.get_type()),
			ExecValue::Column(column) => ValueDescr::column(column.get_type()),
			ExecValue::Chunked(chunked) => ValueDescr::column(chunked.get_type()),
		}
	}

	pub fn as_scalar(&self) -> Option<&'a Value> {
		match *self {
			ExecValue::Scalar(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_column(&self) -> Option<&'a ColumnData> {
		match *self {
			ExecValue::Column(column) => Some(column),
			_ => None,
		}
	}

	pub fn as_chunked(&self) -> Option<&'a ChunkedColumn> {
		match *self {
			ExecValue::Chunked(chunked) => Some(chunked),
			_ => None,
		}
	}
}

/// The arguments of one kernel invocation.
#[derive(Debug, Clone)]
pub struct ExecSpan<'a> {
	values: Vec<ExecValue<'a>>,
	length: Option<usize>,
}

impl<'a> ExecSpan<'a> {
	pub fn new(values: Vec<ExecValue<'a>>, length: Option<usize>) -> Self {
		Self {
			values,
			length,
		}
	}

	pub fn values(&self) -> &[ExecValue<'a>] {
		&self.values
	}

	pub fn value(&self, index: usize) -> Result<ExecValue<'a>, FunctionError> {
		self.values
			.get(index)
			.copied()
			.ok_or_else(|| FunctionError::internal(format!("kernel reads argument {index} of {}", self.values.len())))
	}

	/// Row count of the column arguments, `None` when every argument is a scalar.
	pub fn length(&self) -> Option<usize> {
		self.length
	}

	pub fn num_values(&self) -> usize {
		self.values.len()
	}
}
