// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_function::{Arity, Function, FunctionDoc, FunctionError, InputSignature, Kernel, RegisterError};
use reifydb_value::{IsNumber, SafeAbs};

use super::unary::{UnaryArithmeticOp, scalar_unary, scalar_unary_not_null};
use crate::null::add_null_kernels;

pub const ABS: &str = "abs";
pub const ABS_CHECKED: &str = "abs_checked";

/// Absolute value; the most negative signed integer wraps to itself.
pub struct AbsoluteValue;

/// Absolute value failing with `Overflow` on the most negative signed integer.
pub struct AbsoluteValueChecked;

impl<T: IsNumber + SafeAbs> UnaryArithmeticOp<T> for AbsoluteValue {
	#[inline]
	fn call(value: T) -> Result<T, FunctionError> {
		Ok(value.wrapping_abs())
	}
}

impl<T: IsNumber + SafeAbs> UnaryArithmeticOp<T> for AbsoluteValueChecked {
	#[inline]
	fn call(value: T) -> Result<T, FunctionError> {
		value.checked_abs().ok_or_else(|| FunctionError::Overflow {
			operation: ABS,
			value: value.to_string(),
		})
	}
}

/// One scalar and one column kernel per numeric type, in [`Type::numeric`](reifydb_value::Type::numeric) order.
macro_rules! add_numeric_kernels {
	($function:expr, $exec:ident, $op:ty; $($t:ty),*) => {
		$(
			$function.add_kernel(Kernel::new(
				InputSignature::scalar(<$t as reifydb_value::NativeType>::TYPE),
				<$t as reifydb_value::NativeType>::TYPE,
				$exec::<$t, $op>,
			))?;
			$function.add_kernel(Kernel::new(
				InputSignature::column(<$t as reifydb_value::NativeType>::TYPE),
				<$t as reifydb_value::NativeType>::TYPE,
				$exec::<$t, $op>,
			))?;
		)*
	};
	($function:expr, $exec:ident, $op:ty) => {
		add_numeric_kernels!($function, $exec, $op; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64)
	};
}

pub fn abs_function() -> Result<Function, RegisterError> {
	let mut result = Function::scalar(
		ABS,
		Arity::unary(),
		FunctionDoc::new(
			"Absolute value",
			"Returns the absolute value of each element. On signed integers the most negative value wraps to itself; use abs_checked to detect it.",
			["x"],
		),
	);
	add_numeric_kernels!(result, scalar_unary, AbsoluteValue);
	add_null_kernels(&mut result)?;
	Ok(result)
}

pub fn abs_checked_function() -> Result<Function, RegisterError> {
	let mut result = Function::scalar(
		ABS_CHECKED,
		Arity::unary(),
		FunctionDoc::new(
			"Absolute value, overflow checked",
			"Returns the absolute value of each element. Fails when a defined element is the most negative value of a signed integer type.",
			["x"],
		),
	);
	add_numeric_kernels!(result, scalar_unary_not_null, AbsoluteValueChecked);
	add_null_kernels(&mut result)?;
	Ok(result)
}
