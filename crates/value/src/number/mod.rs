// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use crate::{
	column::ColumnData,
	container::FixedContainer,
	r#type::{Type, TypeCategory},
	value::Value,
};

pub mod safe;

/// A fixed width Rust type backing one [`Type`].
pub trait NativeType: Copy + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static {
	const TYPE: Type;

	fn container(data: &ColumnData) -> Option<&FixedContainer<Self>>;

	fn into_column(container: FixedContainer<Self>) -> ColumnData;

	fn from_value(value: &Value) -> Option<Self>;

	fn into_value(self) -> Value;

	/// Little endian bytes of the value, zero padded to eight bytes.
	fn key_bytes(self) -> [u8; 8];
}

pub trait IsNumber: NativeType + Display {
	const CATEGORY: TypeCategory;
}

pub trait IsFloat: IsNumber {}

pub trait IsInt: IsNumber {}

pub trait IsUint: IsNumber {}

macro_rules! impl_native {
	($t:ty => $variant:ident, |$v:ident| $bytes:expr) => {
		impl NativeType for $t {
			const TYPE: Type = Type::$variant;

			fn container(data: &ColumnData) -> Option<&FixedContainer<Self>> {
				match data {
					ColumnData::$variant(container) => Some(container),
					_ => None,
				}
			}

			fn into_column(container: FixedContainer<Self>) -> ColumnData {
				ColumnData::$variant(container)
			}

			fn from_value(value: &Value) -> Option<Self> {
				match value {
					Value::$variant(v) => Some(*v),
					_ => None,
				}
			}

			fn into_value(self) -> Value {
				Value::$variant(self)
			}

			#[inline]
			fn key_bytes(self) -> [u8; 8] {
				let $v = self;
				let le = $bytes;
				let mut result = [0u8; 8];
				result[..le.len()].copy_from_slice(&le);
				result
			}
		}
	};
}

impl_native!(bool => Boolean, |v| [v as u8]);
impl_native!(i8 => Int1, |v| v.to_le_bytes());
impl_native!(i16 => Int2, |v| v.to_le_bytes());
impl_native!(i32 => Int4, |v| v.to_le_bytes());
impl_native!(i64 => Int8, |v| v.to_le_bytes());
impl_native!(u8 => Uint1, |v| v.to_le_bytes());
impl_native!(u16 => Uint2, |v| v.to_le_bytes());
impl_native!(u32 => Uint4, |v| v.to_le_bytes());
impl_native!(u64 => Uint8, |v| v.to_le_bytes());
impl_native!(f32 => Float4, |v| v.to_bits().to_le_bytes());
impl_native!(f64 => Float8, |v| v.to_bits().to_le_bytes());

macro_rules! impl_number {
	($category:ident, $marker:ident: $($t:ty),*) => {
		$(
			impl IsNumber for $t {
				const CATEGORY: TypeCategory = TypeCategory::$category;
			}
			impl $marker for $t {}
		)*
	};
}

impl_number!(SignedInt, IsInt: i8, i16, i32, i64);
impl_number!(UnsignedInt, IsUint: u8, u16, u32, u64);
impl_number!(Float, IsFloat: f32, f64);

#[cfg(test)]
mod tests {
	use super::*;

	fn category_matches<T: IsNumber>() {
		assert_eq!(T::TYPE.category(), Some(T::CATEGORY), "{}", T::TYPE);
	}

	#[test]
	fn test_category_matches_type() {
		category_matches::<i8>();
		category_matches::<i16>();
		category_matches::<i32>();
		category_matches::<i64>();
		category_matches::<u8>();
		category_matches::<u16>();
		category_matches::<u32>();
		category_matches::<u64>();
		category_matches::<f32>();
		category_matches::<f64>();
	}

	#[test]
	fn test_value_round_trip() {
		assert_eq!(i32::from_value(&(-7i32).into_value()), Some(-7));
		assert_eq!(i32::from_value(&Value::Int8(1)), None);
		assert_eq!(bool::from_value(&Value::Boolean(true)), Some(true));
	}

	#[test]
	fn test_key_bytes() {
		assert_eq!((-1i16).key_bytes(), [0xff, 0xff, 0, 0, 0, 0, 0, 0]);
		assert_eq!(1u32.key_bytes(), [1, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(true.key_bytes(), [1, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(1.0f64.key_bytes(), 1.0f64.to_bits().to_le_bytes());
	}

	#[test]
	fn test_container_lookup() {
		let column = ColumnData::int4(vec![1, 2]);
		assert!(i32::container(&column).is_some());
		assert!(i64::container(&column).is_none());
	}
}
