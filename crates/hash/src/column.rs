// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_value::{BitVec, ColumnData, Type};

/// Borrowed storage of a [`TypedColumn`].
#[derive(Debug, Clone, Copy)]
pub enum TypedBuffer<'a> {
	Boolean(&'a [bool]),
	Int1(&'a [i8]),
	Int2(&'a [i16]),
	Int4(&'a [i32]),
	Int8(&'a [i64]),
	Uint1(&'a [u8]),
	Uint2(&'a [u16]),
	Uint4(&'a [u32]),
	Uint8(&'a [u64]),
	Float4(&'a [f32]),
	Float8(&'a [f64]),
	Variable {
		offsets: &'a [usize],
		values: &'a [u8],
	},
	/// Every slot is undefined.
	Null,
}

/// A read-only view over column storage owned elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct TypedColumn<'a> {
	ty: Type,
	len: usize,
	buffer: TypedBuffer<'a>,
	validity: Option<&'a BitVec>,
}

impl<'a> TypedColumn<'a> {
	pub fn new(column: &'a ColumnData) -> Self {
		let buffer = match column {
			ColumnData::Undefined(_) => TypedBuffer::Null,
			ColumnData::Boolean(c) => TypedBuffer::Boolean(c.data()),
			ColumnData::Int1(c) => TypedBuffer::Int1(c.data()),
			ColumnData::Int2(c) => TypedBuffer::Int2(c.data()),
			ColumnData::Int4(c) => TypedBuffer::Int4(c.data()),
			ColumnData::Int8(c) => TypedBuffer::Int8(c.data()),
			ColumnData::Uint1(c) => TypedBuffer::Uint1(c.data()),
			ColumnData::Uint2(c) => TypedBuffer::Uint2(c.data()),
			ColumnData::Uint4(c) => TypedBuffer::Uint4(c.data()),
			ColumnData::Uint8(c) => TypedBuffer::Uint8(c.data()),
			ColumnData::Float4(c) => TypedBuffer::Float4(c.data()),
			ColumnData::Float8(c) => TypedBuffer::Float8(c.data()),
			ColumnData::Utf8(c) | ColumnData::Blob(c) => TypedBuffer::Variable {
				offsets: c.offsets(),
				values: c.values(),
			},
		};

		Self {
			ty: column.get_type(),
			len: column.len(),
			buffer,
			validity: column.bitvec(),
		}
	}

	pub fn get_type(&self) -> Type {
		self.ty
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn buffer(&self) -> TypedBuffer<'a> {
		self.buffer
	}

	pub fn validity(&self) -> Option<&'a BitVec> {
		self.validity
	}

	pub fn is_variable_width(&self) -> bool {
		matches!(self.buffer, TypedBuffer::Variable { .. })
	}

	/// Payload bytes of rows `offset..offset + len`, zero for fixed width columns.
	pub fn byte_len(&self, offset: usize, len: usize) -> usize {
		match self.buffer {
			TypedBuffer::Variable {
				offsets,
				..
			} => offsets[offset + len] - offsets[offset],
			_ => 0,
		}
	}
}

impl<'a> From<&'a ColumnData> for TypedColumn<'a> {
	fn from(column: &'a ColumnData) -> Self {
		Self::new(column)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed() {
		let data = ColumnData::int2_with_bitvec(vec![1, 2, 3], vec![true, false, true]);
		let column = TypedColumn::from(&data);
		assert_eq!(column.get_type(), Type::Int2);
		assert_eq!(column.len(), 3);
		assert!(matches!(column.buffer(), TypedBuffer::Int2(&[1, 2, 3])));
		assert!(!column.validity().unwrap().get(1));
		assert!(!column.is_variable_width());
		assert_eq!(column.byte_len(0, 3), 0);
	}

	#[test]
	fn test_variable() {
		let data = ColumnData::utf8(["ab", "cde"]);
		let column = TypedColumn::new(&data);
		assert!(column.is_variable_width());
		assert_eq!(column.byte_len(0, 2), 5);
		assert!(column.validity().is_none());
	}

	#[test]
	fn test_undefined() {
		let data = ColumnData::undefined(4);
		let column = TypedColumn::new(&data);
		assert_eq!(column.len(), 4);
		assert!(matches!(column.buffer(), TypedBuffer::Null));
	}
}
