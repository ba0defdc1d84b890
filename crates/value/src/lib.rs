// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Values flowing in and out of compute functions.
//!
//! - [`Type`] and [`TypeCategory`] describe the closed set of supported types
//! - [`Value`] is a single scalar, [`ColumnData`] a column of values
//! - [`ChunkedColumn`] and [`RecordBatch`] group columns
//! - [`Datum`] is the tagged union passed to and returned from functions

pub mod bitvec;
pub mod column;
pub mod container;
pub mod datum;
pub mod error;
pub mod number;
pub mod r#type;
pub mod value;

pub use bitvec::BitVec;
pub use column::{ColumnData, batch::{Field, RecordBatch}, chunked::ChunkedColumn};
pub use container::{FixedContainer, VarContainer};
pub use datum::{Datum, Shape, ValueDescr};
pub use error::ValueError;
pub use number::{IsFloat, IsInt, IsNumber, IsUint, NativeType, safe::abs::SafeAbs};
pub use r#type::{Type, TypeCategory};
pub use value::Value;

pub type Result<T> = std::result::Result<T, ValueError>;
