// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_function::FunctionOptions;
use reifydb_value::Value;
use serde::{Deserialize, Serialize};

/// Options of the arithmetic function families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticOptions {
	/// Fail on overflow instead of wrapping.
	pub check_overflow: bool,
}

impl ArithmeticOptions {
	pub fn checked() -> Self {
		Self {
			check_overflow: true,
		}
	}
}

impl FunctionOptions for ArithmeticOptions {}

/// Options of `index`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexOptions {
	/// The value to search for.
	pub value: Value,
}

impl IndexOptions {
	pub fn new(value: Value) -> Self {
		Self {
			value,
		}
	}
}

impl FunctionOptions for IndexOptions {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_arithmetic_options_deserialize() {
		let options: ArithmeticOptions = serde_json::from_str(r#"{"check_overflow": true}"#).unwrap();
		assert_eq!(options, ArithmeticOptions::checked());

		let options: ArithmeticOptions = serde_json::from_str("{}").unwrap();
		assert!(!options.check_overflow);
	}
}
