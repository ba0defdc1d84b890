// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

/// Packed validity bitmap, one bit per slot, least significant bit first.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xff
		} else {
			0x00
		};
		let mut result = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		result.clear_tail();
		result
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn get(&self, index: usize) -> bool {
		if index >= self.len {
			return false;
		}
		self.bits[index / 8] & (1 << (index % 8)) != 0
	}

	pub fn set(&mut self, index: usize, value: bool) {
		if index >= self.len {
			return;
		}
		let mask = 1 << (index % 8);
		if value {
			self.bits[index / 8] |= mask;
		} else {
			self.bits[index / 8] &= !mask;
		}
	}

	pub fn push(&mut self, value: bool) {
		if self.len % 8 == 0 {
			self.bits.push(0);
		}
		self.len += 1;
		self.set(self.len - 1, value);
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all_set(&self) -> bool {
		self.count_ones() == self.len
	}

	pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(|i| self.get(i))
	}

	/// Copies `len` bits starting at `offset` into a new bitmap.
	pub fn slice(&self, offset: usize, len: usize) -> Self {
		(offset..offset + len).map(|i| self.get(i)).collect()
	}

	fn clear_tail(&mut self) {
		let used = self.len % 8;
		if used != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1u8 << used) - 1;
			}
		}
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut result = BitVec::new();
		for value in iter {
			result.push(value);
		}
		result
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(values: Vec<bool>) -> Self {
		values.into_iter().collect()
	}
}

impl From<&[bool]> for BitVec {
	fn from(values: &[bool]) -> Self {
		values.iter().copied().collect()
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_get() {
		let bv: BitVec = vec![true, false, true, true, false, false, false, false, true].into();
		assert_eq!(bv.len(), 9);
		assert!(bv.get(0));
		assert!(!bv.get(1));
		assert!(bv.get(8));
		assert!(!bv.get(9));
		assert_eq!(bv.count_ones(), 4);
	}

	#[test]
	fn test_repeat() {
		let bv = BitVec::repeat(11, true);
		assert_eq!(bv.count_ones(), 11);
		assert!(bv.all_set());

		let bv = BitVec::repeat(5, false);
		assert_eq!(bv.count_ones(), 0);
	}

	#[test]
	fn test_set() {
		let mut bv = BitVec::repeat(4, false);
		bv.set(2, true);
		assert_eq!(bv.iter().collect::<Vec<_>>(), vec![false, false, true, false]);
		bv.set(2, false);
		assert_eq!(bv.count_ones(), 0);
	}

	#[test]
	fn test_slice() {
		let bv: BitVec = vec![true, false, true, false, true].into();
		let sliced = bv.slice(1, 3);
		assert_eq!(sliced.iter().collect::<Vec<_>>(), vec![false, true, false]);
	}

	#[test]
	fn test_debug() {
		let bv: BitVec = vec![true, false].into();
		assert_eq!(format!("{bv:?}"), "BitVec[10]");
	}
}
