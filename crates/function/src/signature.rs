// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use reifydb_value::{Type, ValueDescr};

/// One accepted (type, shape) per argument position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSignature(Vec<ValueDescr>);

impl InputSignature {
	pub fn new(inputs: impl Into<Vec<ValueDescr>>) -> Self {
		Self(inputs.into())
	}

	pub fn scalar(ty: Type) -> Self {
		Self(vec![ValueDescr::scalar(ty)])
	}

	pub fn column(ty: Type) -> Self {
		Self(vec![ValueDescr::column(ty)])
	}

	pub fn inputs(&self) -> &[ValueDescr] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Exact match: same length, equal type and equal shape at every position.
	pub fn matches(&self, args: &[ValueDescr]) -> bool {
		self.0.as_slice() == args
	}
}

impl Display for InputSignature {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("(")?;
		for (i, input) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{input}")?;
		}
		f.write_str(")")
	}
}
