// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::bitvec::BitVec;

/// Variable width values stored back to back in one byte buffer.
///
/// Slot `i` spans `values[offsets[i]..offsets[i + 1]]`; `offsets` always holds
/// `len + 1` entries starting at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct VarContainer {
	offsets: Vec<usize>,
	values: Vec<u8>,
	bitvec: Option<BitVec>,
}

impl Default for VarContainer {
	fn default() -> Self {
		Self {
			offsets: vec![0],
			values: Vec::new(),
			bitvec: None,
		}
	}
}

impl VarContainer {
	pub fn from_slices<I, B>(items: I) -> Self
	where
		I: IntoIterator<Item = B>,
		B: AsRef<[u8]>,
	{
		let mut result = Self::default();
		for item in items {
			result.push(item.as_ref());
		}
		result
	}

	/// Builds a container from optional values, `None` becomes an empty undefined slot.
	pub fn from_options<I, B>(items: I) -> Self
	where
		I: IntoIterator<Item = Option<B>>,
		B: AsRef<[u8]>,
	{
		let mut result = Self::default();
		let mut bitvec = BitVec::new();
		for item in items {
			bitvec.push(item.is_some());
			match item {
				Some(bytes) => result.push(bytes.as_ref()),
				None => result.push(&[]),
			}
		}
		result.bitvec = Some(bitvec);
		result
	}

	fn push(&mut self, bytes: &[u8]) {
		self.values.extend_from_slice(bytes);
		self.offsets.push(self.values.len());
	}

	pub fn len(&self) -> usize {
		self.offsets.len() - 1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn offsets(&self) -> &[usize] {
		&self.offsets
	}

	pub fn values(&self) -> &[u8] {
		&self.values
	}

	pub fn bitvec(&self) -> Option<&BitVec> {
		self.bitvec.as_ref()
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.as_ref().is_none_or(|bv| bv.get(index))
	}

	/// Raw bytes of slot `index`, regardless of validity.
	pub fn bytes(&self, index: usize) -> &[u8] {
		&self.values[self.offsets[index]..self.offsets[index + 1]]
	}

	pub fn get(&self, index: usize) -> Option<&[u8]> {
		if self.is_defined(index) {
			Some(self.bytes(index))
		} else {
			None
		}
	}

	/// Total payload bytes of the slots in `offset..offset + len`.
	pub fn byte_len(&self, offset: usize, len: usize) -> usize {
		self.offsets[offset + len] - self.offsets[offset]
	}

	pub fn slice(&self, offset: usize, len: usize) -> Self {
		let mut result = Self::default();
		for index in offset..offset + len {
			result.push(self.bytes(index));
		}
		result.bitvec = self.bitvec.as_ref().map(|bv| bv.slice(offset, len));
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_slices() {
		let container = VarContainer::from_slices(["ab", "", "cde"]);
		assert_eq!(container.len(), 3);
		assert_eq!(container.offsets(), &[0, 2, 2, 5]);
		assert_eq!(container.bytes(2), b"cde");
		assert_eq!(container.get(1), Some(&b""[..]));
	}

	#[test]
	fn test_from_options() {
		let container = VarContainer::from_options([Some("x"), None, Some("yz")]);
		assert!(container.is_defined(0));
		assert!(!container.is_defined(1));
		assert_eq!(container.get(1), None);
		assert_eq!(container.bytes(2), b"yz");
	}

	#[test]
	fn test_byte_len() {
		let container = VarContainer::from_slices(["aaaa", "bb", "c"]);
		assert_eq!(container.byte_len(0, 3), 7);
		assert_eq!(container.byte_len(1, 2), 3);
	}

	#[test]
	fn test_slice() {
		let container = VarContainer::from_slices(["aaaa", "bb", "c"]);
		let sliced = container.slice(1, 2);
		assert_eq!(sliced.offsets(), &[0, 2, 3]);
		assert_eq!(sliced.bytes(0), b"bb");
	}

	#[test]
	fn test_offsets_track_byte_positions() {
		let payload = vec![0u8; 70_000];
		let container = VarContainer::from_slices([&payload[..], b"tail", &payload[..]]);
		let offsets: &[usize] = container.offsets();
		assert_eq!(offsets, &[0, 70_000, 70_004, 140_004]);
		assert_eq!(container.bytes(1), b"tail");
		assert_eq!(container.byte_len(0, 3), 140_004);
	}

	#[test]
	fn test_empty() {
		let container = VarContainer::default();
		assert!(container.is_empty());
		assert_eq!(container.byte_len(0, 0), 0);
	}
}
