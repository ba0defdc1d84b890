// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_function::{
	ExecSpan, ExecValue, Function, FunctionError, InputSignature, Kernel, KernelContext, RegisterError,
};
use reifydb_value::{ColumnData, Datum, Type};

/// Undefined in, undefined out: `Datum::Null` for scalars, an undefined column
/// of the same length for columns.
pub(crate) fn null_exec(_: &mut KernelContext<'_>, span: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
	*out = match span.value(0)? {
		ExecValue::Scalar(_) => Datum::Null,
		ExecValue::Column(column) => Datum::Column(ColumnData::undefined(column.len())),
		ExecValue::Chunked(_) => return Err(FunctionError::internal("null kernel received a chunked column")),
	};
	Ok(())
}

/// Adds the undefined input kernels. Registered after every typed kernel.
pub(crate) fn add_null_kernels(function: &mut Function) -> Result<(), RegisterError> {
	function.add_kernel(Kernel::new(InputSignature::scalar(Type::Undefined), Type::Undefined, null_exec))?;
	function.add_kernel(Kernel::new(InputSignature::column(Type::Undefined), Type::Undefined, null_exec))
}
