// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Kernel templates for unary arithmetic.
//!
//! An operation implements [`UnaryArithmeticOp`] once per numeric type and the
//! templates below turn it into kernel entry points for both scalar and column
//! arguments.

use reifydb_function::{ExecSpan, ExecValue, FunctionError, KernelContext};
use reifydb_value::{ColumnData, Datum, FixedContainer, IsNumber};

pub trait UnaryArithmeticOp<T: IsNumber> {
	fn call(value: T) -> Result<T, FunctionError>;
}

/// Applies `Op` to every slot, undefined ones included, and keeps the input validity.
pub fn scalar_unary<T, Op>(_: &mut KernelContext<'_>, span: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError>
where
	T: IsNumber,
	Op: UnaryArithmeticOp<T>,
{
	*out = match span.value(0)? {
		ExecValue::Scalar(value) => Datum::Scalar(Op::call(scalar::<T>(value)?)?.into_value()),
		ExecValue::Column(column) => {
			let container = container::<T>(column)?;
			let data = container.data().iter().map(|v| Op::call(*v)).collect::<Result<Vec<_>, _>>()?;
			Datum::Column(T::into_column(FixedContainer::from_parts(data, container.bitvec().cloned())))
		}
		ExecValue::Chunked(_) => return Err(FunctionError::internal("unary kernel received a chunked column")),
	};
	Ok(())
}

/// Applies `Op` to defined slots only; undefined slots stay undefined and are never evaluated.
pub fn scalar_unary_not_null<T, Op>(
	_: &mut KernelContext<'_>,
	span: &ExecSpan<'_>,
	out: &mut Datum,
) -> Result<(), FunctionError>
where
	T: IsNumber,
	Op: UnaryArithmeticOp<T>,
{
	*out = match span.value(0)? {
		ExecValue::Scalar(value) => Datum::Scalar(Op::call(scalar::<T>(value)?)?.into_value()),
		ExecValue::Column(column) => {
			let container = container::<T>(column)?;
			let mut data = Vec::with_capacity(container.len());
			for (i, value) in container.data().iter().enumerate() {
				data.push(if container.is_defined(i) {
					Op::call(*value)?
				} else {
					T::default()
				});
			}
			Datum::Column(T::into_column(FixedContainer::from_parts(data, container.bitvec().cloned())))
		}
		ExecValue::Chunked(_) => return Err(FunctionError::internal("unary kernel received a chunked column")),
	};
	Ok(())
}

fn scalar<T: IsNumber>(value: &reifydb_value::Value) -> Result<T, FunctionError> {
	T::from_value(value)
		.ok_or_else(|| FunctionError::internal(format!("expected {} scalar, got {}", T::TYPE, value.get_type())))
}

fn container<T: IsNumber>(column: &ColumnData) -> Result<&FixedContainer<T>, FunctionError> {
	T::container(column)
		.ok_or_else(|| FunctionError::internal(format!("expected {} column, got {}", T::TYPE, column.get_type())))
}
