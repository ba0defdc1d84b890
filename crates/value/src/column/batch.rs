// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Result, column::ColumnData, error::ValueError, r#type::Type};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	pub ty: Type,
}

impl Field {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

/// Named columns of equal row count.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBatch {
	fields: Vec<Field>,
	columns: Vec<ColumnData>,
	row_count: usize,
}

impl RecordBatch {
	pub fn try_new(fields: Vec<Field>, columns: Vec<ColumnData>) -> Result<Self> {
		if fields.len() != columns.len() {
			return Err(ValueError::FieldCountMismatch {
				fields: fields.len(),
				columns: columns.len(),
			});
		}

		let row_count = columns.first().map(ColumnData::len).unwrap_or(0);
		for (index, (field, column)) in fields.iter().zip(&columns).enumerate() {
			if column.len() != row_count {
				return Err(ValueError::ColumnLengthMismatch {
					index,
					expected: row_count,
					actual: column.len(),
				});
			}
			if field.ty != column.get_type() {
				return Err(ValueError::FieldTypeMismatch {
					name: field.name.clone(),
					declared: field.ty,
					actual: column.get_type(),
				});
			}
		}

		Ok(Self {
			fields,
			columns,
			row_count,
		})
	}

	/// Names columns `c0`, `c1`, ... after their position.
	pub fn from_columns(columns: Vec<ColumnData>) -> Result<Self> {
		let fields = columns.iter().enumerate().map(|(i, c)| Field::new(format!("c{i}"), c.get_type())).collect();
		Self::try_new(fields, columns)
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn columns(&self) -> &[ColumnData] {
		&self.columns
	}

	pub fn num_rows(&self) -> usize {
		self.row_count
	}

	pub fn num_columns(&self) -> usize {
		self.columns.len()
	}

	pub fn column(&self, index: usize) -> Result<&ColumnData> {
		self.columns.get(index).ok_or(ValueError::ColumnIndexOutOfBounds {
			index,
			len: self.columns.len(),
		})
	}

	pub fn column_by_name(&self, name: &str) -> Option<&ColumnData> {
		self.fields.iter().position(|f| f.name == name).map(|i| &self.columns[i])
	}

	/// Borrows the columns at `indices`, in that order.
	pub fn select_columns(&self, indices: &[usize]) -> Result<Vec<&ColumnData>> {
		indices.iter().map(|&i| self.column(i)).collect()
	}
}
