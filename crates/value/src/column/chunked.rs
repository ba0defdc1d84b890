// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Result, column::ColumnData, error::ValueError, r#type::Type, value::Value};

/// A logical column split into chunks that all share one type.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkedColumn {
	ty: Type,
	chunks: Vec<ColumnData>,
}

impl ChunkedColumn {
	pub fn try_new(ty: Type, chunks: Vec<ColumnData>) -> Result<Self> {
		for (index, chunk) in chunks.iter().enumerate() {
			if chunk.get_type() != ty {
				return Err(ValueError::ChunkTypeMismatch {
					index,
					expected: ty,
					actual: chunk.get_type(),
				});
			}
		}
		Ok(Self {
			ty,
			chunks,
		})
	}

	/// Takes the type from the first chunk; needs at least one chunk.
	pub fn from_chunks(chunks: Vec<ColumnData>) -> Option<Result<Self>> {
		let ty = chunks.first()?.get_type();
		Some(Self::try_new(ty, chunks))
	}

	pub fn get_type(&self) -> Type {
		self.ty
	}

	pub fn chunks(&self) -> &[ColumnData] {
		&self.chunks
	}

	pub fn num_chunks(&self) -> usize {
		self.chunks.len()
	}

	pub fn len(&self) -> usize {
		self.chunks.iter().map(ColumnData::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn chunk_lengths(&self) -> Vec<usize> {
		self.chunks.iter().map(ColumnData::len).collect()
	}

	pub fn get_value(&self, mut index: usize) -> Value {
		for chunk in &self.chunks {
			if index < chunk.len() {
				return chunk.get_value(index);
			}
			index -= chunk.len();
		}
		Value::Undefined
	}
}
