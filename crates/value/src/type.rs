// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// All types a value or column can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A binary large object (BLOB)
	Blob,
}

/// The numeric type classes kernels are specialized over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
	Float,
	SignedInt,
	UnsignedInt,
}

const NUMERIC: [Type; 10] = [
	Type::Int1,
	Type::Int2,
	Type::Int4,
	Type::Int8,
	Type::Uint1,
	Type::Uint2,
	Type::Uint4,
	Type::Uint8,
	Type::Float4,
	Type::Float8,
];

const ALL: [Type; 14] = [
	Type::Undefined,
	Type::Boolean,
	Type::Int1,
	Type::Int2,
	Type::Int4,
	Type::Int8,
	Type::Uint1,
	Type::Uint2,
	Type::Uint4,
	Type::Uint8,
	Type::Float4,
	Type::Float8,
	Type::Utf8,
	Type::Blob,
];

impl Type {
	/// Every numeric type, signed integers first, then unsigned, then floats.
	pub fn numeric() -> &'static [Type] {
		&NUMERIC
	}

	pub fn all() -> &'static [Type] {
		&ALL
	}

	pub fn category(&self) -> Option<TypeCategory> {
		match self {
			Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 => Some(TypeCategory::SignedInt),
			Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 => Some(TypeCategory::UnsignedInt),
			Type::Float4 | Type::Float8 => Some(TypeCategory::Float),
			_ => None,
		}
	}

	pub fn is_number(&self) -> bool {
		self.category().is_some()
	}

	/// Width in bytes of a single element, `None` for variable width types.
	pub fn byte_width(&self) -> Option<usize> {
		match self {
			Type::Undefined => Some(0),
			Type::Boolean | Type::Int1 | Type::Uint1 => Some(1),
			Type::Int2 | Type::Uint2 => Some(2),
			Type::Int4 | Type::Uint4 | Type::Float4 => Some(4),
			Type::Int8 | Type::Uint8 | Type::Float8 => Some(8),
			Type::Utf8 | Type::Blob => None,
		}
	}

	pub fn is_variable_width(&self) -> bool {
		self.byte_width().is_none()
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Undefined => f.write_str("UNDEFINED"),
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Int1 => f.write_str("INT1"),
			Type::Int2 => f.write_str("INT2"),
			Type::Int4 => f.write_str("INT4"),
			Type::Int8 => f.write_str("INT8"),
			Type::Uint1 => f.write_str("UINT1"),
			Type::Uint2 => f.write_str("UINT2"),
			Type::Uint4 => f.write_str("UINT4"),
			Type::Uint8 => f.write_str("UINT8"),
			Type::Float4 => f.write_str("FLOAT4"),
			Type::Float8 => f.write_str("FLOAT8"),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Blob => f.write_str("BLOB"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_numeric_types_have_a_category() {
		for ty in Type::numeric() {
			assert!(ty.is_number(), "{ty}");
			assert!(ty.byte_width().is_some());
		}
	}

	#[test]
	fn test_non_numeric_types_have_no_category() {
		assert_eq!(Type::Boolean.category(), None);
		assert_eq!(Type::Utf8.category(), None);
		assert_eq!(Type::Undefined.category(), None);
	}

	#[test]
	fn test_categories() {
		assert_eq!(Type::Int4.category(), Some(TypeCategory::SignedInt));
		assert_eq!(Type::Uint8.category(), Some(TypeCategory::UnsignedInt));
		assert_eq!(Type::Float4.category(), Some(TypeCategory::Float));
	}

	#[test]
	fn test_variable_width() {
		assert!(Type::Utf8.is_variable_width());
		assert!(Type::Blob.is_variable_width());
		assert!(!Type::Int8.is_variable_width());
		assert_eq!(Type::Int2.byte_width(), Some(2));
	}
}
