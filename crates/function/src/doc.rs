// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Descriptive text attached to a function. Never consulted by dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDoc {
	pub summary: String,
	pub description: String,
	pub arg_names: Vec<String>,
}

impl FunctionDoc {
	pub fn new<I, S>(summary: impl Into<String>, description: impl Into<String>, arg_names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			summary: summary.into(),
			description: description.into(),
			arg_names: arg_names.into_iter().map(Into::into).collect(),
		}
	}
}
