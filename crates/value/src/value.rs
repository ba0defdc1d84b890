// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::r#type::Type;

/// A single scalar value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
	#[default]
	Undefined,
	Boolean(bool),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Uint1(u8),
	Uint2(u16),
	Uint4(u32),
	Uint8(u64),
	Float4(f32),
	Float8(f64),
	Utf8(String),
	Blob(Vec<u8>),
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn utf8(value: impl Into<String>) -> Self {
		Value::Utf8(value.into())
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Uint1(v) => Display::fmt(v, f),
			Value::Uint2(v) => Display::fmt(v, f),
			Value::Uint4(v) => Display::fmt(v, f),
			Value::Uint8(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => write!(f, "'{v}'"),
			Value::Blob(v) => {
				f.write_str("0x")?;
				for byte in v {
					write!(f, "{byte:02x}")?;
				}
				Ok(())
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_type() {
		assert_eq!(Value::Int4(1).get_type(), Type::Int4);
		assert_eq!(Value::utf8("a").get_type(), Type::Utf8);
		assert_eq!(Value::Undefined.get_type(), Type::Undefined);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::Int8(-3).to_string(), "-3");
		assert_eq!(Value::utf8("abc").to_string(), "'abc'");
		assert_eq!(Value::Blob(vec![0xde, 0xad]).to_string(), "0xdead");
		assert_eq!(Value::Undefined.to_string(), "undefined");
	}
}
