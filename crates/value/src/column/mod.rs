// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod batch;
pub mod chunked;

use crate::{
	bitvec::BitVec,
	container::{FixedContainer, VarContainer},
	number::NativeType,
	r#type::Type,
	value::Value,
};

/// A column of values sharing one type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
	Undefined(usize),
	Boolean(FixedContainer<bool>),
	Int1(FixedContainer<i8>),
	Int2(FixedContainer<i16>),
	Int4(FixedContainer<i32>),
	Int8(FixedContainer<i64>),
	Uint1(FixedContainer<u8>),
	Uint2(FixedContainer<u16>),
	Uint4(FixedContainer<u32>),
	Uint8(FixedContainer<u64>),
	Float4(FixedContainer<f32>),
	Float8(FixedContainer<f64>),
	Utf8(VarContainer),
	Blob(VarContainer),
}

macro_rules! constructors {
	($($name:ident, $with_bitvec:ident => $t:ty);* $(;)?) => {
		$(
			pub fn $name(data: impl Into<Vec<$t>>) -> Self {
				Self::from_vec::<$t>(data.into())
			}

			pub fn $with_bitvec(data: impl Into<Vec<$t>>, bitvec: impl Into<BitVec>) -> Self {
				<$t>::into_column(FixedContainer::with_bitvec(data.into(), bitvec))
			}
		)*
	};
}

/// Forwards to the container inside every variant, `$undefined` handles `Undefined(len)`.
macro_rules! with_container {
	($self:expr, $c:ident => $body:expr, $len:ident => $undefined:expr) => {
		match $self {
			ColumnData::Undefined($len) => $undefined,
			ColumnData::Boolean($c) => $body,
			ColumnData::Int1($c) => $body,
			ColumnData::Int2($c) => $body,
			ColumnData::Int4($c) => $body,
			ColumnData::Int8($c) => $body,
			ColumnData::Uint1($c) => $body,
			ColumnData::Uint2($c) => $body,
			ColumnData::Uint4($c) => $body,
			ColumnData::Uint8($c) => $body,
			ColumnData::Float4($c) => $body,
			ColumnData::Float8($c) => $body,
			ColumnData::Utf8($c) => $body,
			ColumnData::Blob($c) => $body,
		}
	};
}

impl ColumnData {
	constructors! {
		bool, bool_with_bitvec => bool;
		int1, int1_with_bitvec => i8;
		int2, int2_with_bitvec => i16;
		int4, int4_with_bitvec => i32;
		int8, int8_with_bitvec => i64;
		uint1, uint1_with_bitvec => u8;
		uint2, uint2_with_bitvec => u16;
		uint4, uint4_with_bitvec => u32;
		uint8, uint8_with_bitvec => u64;
		float4, float4_with_bitvec => f32;
		float8, float8_with_bitvec => f64;
	}

	pub fn from_vec<T: NativeType>(data: Vec<T>) -> Self {
		T::into_column(FixedContainer::new(data))
	}

	pub fn from_options<T: NativeType>(data: Vec<Option<T>>) -> Self {
		T::into_column(FixedContainer::from_options(data))
	}

	pub fn utf8<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		ColumnData::Utf8(VarContainer::from_slices(items.into_iter().map(|s| s.as_ref().as_bytes().to_vec())))
	}

	pub fn utf8_options<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = Option<S>>,
		S: AsRef<str>,
	{
		ColumnData::Utf8(VarContainer::from_options(
			items.into_iter().map(|s| s.map(|s| s.as_ref().as_bytes().to_vec())),
		))
	}

	pub fn blob<I, B>(items: I) -> Self
	where
		I: IntoIterator<Item = B>,
		B: AsRef<[u8]>,
	{
		ColumnData::Blob(VarContainer::from_slices(items))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(len)
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Undefined(_) => Type::Undefined,
			ColumnData::Boolean(_) => Type::Boolean,
			ColumnData::Int1(_) => Type::Int1,
			ColumnData::Int2(_) => Type::Int2,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Uint1(_) => Type::Uint1,
			ColumnData::Uint2(_) => Type::Uint2,
			ColumnData::Uint4(_) => Type::Uint4,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Float4(_) => Type::Float4,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Blob(_) => Type::Blob,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, c => c.len(), len => *len)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn bitvec(&self) -> Option<&BitVec> {
		with_container!(self, c => c.bitvec(), _len => None)
	}

	pub fn is_defined(&self, index: usize) -> bool {
		with_container!(self, c => c.is_defined(index), _len => false)
	}

	/// The value at `index` as a scalar, `Value::Undefined` for undefined slots.
	pub fn get_value(&self, index: usize) -> Value {
		if !self.is_defined(index) {
			return Value::Undefined;
		}
		match self {
			ColumnData::Undefined(_) => Value::Undefined,
			ColumnData::Boolean(c) => Value::Boolean(c[index]),
			ColumnData::Int1(c) => Value::Int1(c[index]),
			ColumnData::Int2(c) => Value::Int2(c[index]),
			ColumnData::Int4(c) => Value::Int4(c[index]),
			ColumnData::Int8(c) => Value::Int8(c[index]),
			ColumnData::Uint1(c) => Value::Uint1(c[index]),
			ColumnData::Uint2(c) => Value::Uint2(c[index]),
			ColumnData::Uint4(c) => Value::Uint4(c[index]),
			ColumnData::Uint8(c) => Value::Uint8(c[index]),
			ColumnData::Float4(c) => Value::Float4(c[index]),
			ColumnData::Float8(c) => Value::Float8(c[index]),
			ColumnData::Utf8(c) => Value::Utf8(String::from_utf8_lossy(c.bytes(index)).into_owned()),
			ColumnData::Blob(c) => Value::Blob(c.bytes(index).to_vec()),
		}
	}

	pub fn slice(&self, offset: usize, len: usize) -> Self {
		match self {
			ColumnData::Undefined(_) => ColumnData::Undefined(len),
			ColumnData::Boolean(c) => ColumnData::Boolean(c.slice(offset, len)),
			ColumnData::Int1(c) => ColumnData::Int1(c.slice(offset, len)),
			ColumnData::Int2(c) => ColumnData::Int2(c.slice(offset, len)),
			ColumnData::Int4(c) => ColumnData::Int4(c.slice(offset, len)),
			ColumnData::Int8(c) => ColumnData::Int8(c.slice(offset, len)),
			ColumnData::Uint1(c) => ColumnData::Uint1(c.slice(offset, len)),
			ColumnData::Uint2(c) => ColumnData::Uint2(c.slice(offset, len)),
			ColumnData::Uint4(c) => ColumnData::Uint4(c.slice(offset, len)),
			ColumnData::Uint8(c) => ColumnData::Uint8(c.slice(offset, len)),
			ColumnData::Float4(c) => ColumnData::Float4(c.slice(offset, len)),
			ColumnData::Float8(c) => ColumnData::Float8(c.slice(offset, len)),
			ColumnData::Utf8(c) => ColumnData::Utf8(c.slice(offset, len)),
			ColumnData::Blob(c) => ColumnData::Blob(c.slice(offset, len)),
		}
	}
}
