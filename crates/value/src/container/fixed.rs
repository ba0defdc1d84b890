// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, ops::Deref};

use crate::bitvec::BitVec;

/// Values of a fixed width type together with an optional validity bitmap.
///
/// A missing bitmap means every slot is defined.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedContainer<T> {
	data: Vec<T>,
	bitvec: Option<BitVec>,
}

impl<T> FixedContainer<T>
where
	T: Copy + Debug + Default,
{
	pub fn new(data: Vec<T>) -> Self {
		Self {
			data,
			bitvec: None,
		}
	}

	pub fn with_bitvec(data: Vec<T>, bitvec: impl Into<BitVec>) -> Self {
		let bitvec = bitvec.into();
		debug_assert_eq!(data.len(), bitvec.len(), "validity length must match data length");
		Self {
			data,
			bitvec: Some(bitvec),
		}
	}

	pub fn from_parts(data: Vec<T>, bitvec: Option<BitVec>) -> Self {
		match bitvec {
			Some(bitvec) => Self::with_bitvec(data, bitvec),
			None => Self::new(data),
		}
	}

	/// Builds a container from optional values, `None` becomes an undefined slot.
	pub fn from_options(values: Vec<Option<T>>) -> Self {
		let bitvec: BitVec = values.iter().map(Option::is_some).collect();
		let data = values.into_iter().map(Option::unwrap_or_default).collect();
		Self::with_bitvec(data, bitvec)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn data(&self) -> &[T] {
		&self.data
	}

	pub fn bitvec(&self) -> Option<&BitVec> {
		self.bitvec.as_ref()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.data.len() && self.bitvec.as_ref().is_none_or(|bv| bv.get(index))
	}

	/// The value at `index`, `None` if the slot is undefined or out of range.
	pub fn get(&self, index: usize) -> Option<&T> {
		if self.is_defined(index) {
			self.data.get(index)
		} else {
			None
		}
	}

	pub fn slice(&self, offset: usize, len: usize) -> Self {
		Self {
			data: self.data[offset..offset + len].to_vec(),
			bitvec: self.bitvec.as_ref().map(|bv| bv.slice(offset, len)),
		}
	}

	pub fn into_parts(self) -> (Vec<T>, Option<BitVec>) {
		(self.data, self.bitvec)
	}
}

impl<T> Deref for FixedContainer<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}
