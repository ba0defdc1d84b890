// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
	column::{ColumnData, batch::RecordBatch, chunked::ChunkedColumn},
	r#type::Type,
	value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
	Scalar,
	Column,
}

impl Display for Shape {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Shape::Scalar => f.write_str("scalar"),
			Shape::Column => f.write_str("column"),
		}
	}
}

/// Type plus shape of one argument, what kernel signatures match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueDescr {
	pub ty: Type,
	pub shape: Shape,
}

impl ValueDescr {
	pub fn scalar(ty: Type) -> Self {
		Self {
			ty,
			shape: Shape::Scalar,
		}
	}

	pub fn column(ty: Type) -> Self {
		Self {
			ty,
			shape: Shape::Column,
		}
	}
}

impl Display for ValueDescr {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.shape, self.ty)
	}
}

/// A function argument or result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Datum {
	#[default]
	Null,
	Scalar(Value),
	Column(ColumnData),
	ChunkedColumn(ChunkedColumn),
	RecordBatch(RecordBatch),
}

impl Datum {
	/// `None` for record batches, which have no single type.
	pub fn descr(&self) -> Option<ValueDescr> {
		match self {
			Datum::Null => Some(ValueDescr::scalar(Type::Undefined)),
			Datum::Scalar(value) => Some(ValueDescr::scalar(value.get_type())),
			Datum::Column(column) => Some(ValueDescr::column(column.get_type())),
			Datum::ChunkedColumn(chunked) => Some(ValueDescr::column(chunked.get_type())),
			Datum::RecordBatch(_) => None,
		}
	}

	pub fn get_type(&self) -> Option<Type> {
		self.descr().map(|d| d.ty)
	}

	/// Row count, `None` for scalars.
	pub fn len(&self) -> Option<usize> {
		match self {
			Datum::Null | Datum::Scalar(_) => None,
			Datum::Column(column) => Some(column.len()),
			Datum::ChunkedColumn(chunked) => Some(chunked.len()),
			Datum::RecordBatch(batch) => Some(batch.num_rows()),
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Datum::Null | Datum::Scalar(Value::Undefined))
	}

	pub fn as_scalar(&self) -> Option<&Value> {
		match self {
			Datum::Scalar(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_column(&self) -> Option<&ColumnData> {
		match self {
			Datum::Column(column) => Some(column),
			_ => None,
		}
	}

	pub fn as_chunked(&self) -> Option<&ChunkedColumn> {
		match self {
			Datum::ChunkedColumn(chunked) => Some(chunked),
			_ => None,
		}
	}

	pub fn as_record_batch(&self) -> Option<&RecordBatch> {
		match self {
			Datum::RecordBatch(batch) => Some(batch),
			_ => None,
		}
	}
}

impl From<Value> for Datum {
	fn from(value: Value) -> Self {
		Datum::Scalar(value)
	}
}

impl From<ColumnData> for Datum {
	fn from(column: ColumnData) -> Self {
		Datum::Column(column)
	}
}

impl From<ChunkedColumn> for Datum {
	fn from(chunked: ChunkedColumn) -> Self {
		Datum::ChunkedColumn(chunked)
	}
}

impl From<RecordBatch> for Datum {
	fn from(batch: RecordBatch) -> Self {
		Datum::RecordBatch(batch)
	}
}
