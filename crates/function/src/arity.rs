// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Accepted argument count of a function; `max` of `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
	pub min: usize,
	pub max: Option<usize>,
}

impl Arity {
	pub const fn exact(n: usize) -> Self {
		Self {
			min: n,
			max: Some(n),
		}
	}

	pub const fn unary() -> Self {
		Self::exact(1)
	}

	pub const fn binary() -> Self {
		Self::exact(2)
	}

	pub const fn between(min: usize, max: usize) -> Self {
		Self {
			min,
			max: Some(max),
		}
	}

	pub const fn at_least(min: usize) -> Self {
		Self {
			min,
			max: None,
		}
	}

	pub fn accepts(&self, count: usize) -> bool {
		count >= self.min && self.max.is_none_or(|max| count <= max)
	}
}

impl Display for Arity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.max {
			Some(max) if max == self.min => write!(f, "exactly {}", self.min),
			Some(max) => write!(f, "between {} and {}", self.min, max),
			None => write!(f, "at least {}", self.min),
		}
	}
}
