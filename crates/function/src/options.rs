// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, fmt::Debug};

/// Per call configuration of a function family.
///
/// Kernels read options through
/// [`KernelContext::options`](crate::KernelContext::options).
pub trait FunctionOptions: Any + Debug + Send + Sync + 'static {}

pub(crate) fn downcast<'a, T: FunctionOptions>(options: &'a (dyn FunctionOptions + 'static)) -> Option<&'a T> {
	let any: &(dyn Any + 'static) = options;
	any.downcast_ref::<T>()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, PartialEq)]
	struct Seed(u32);

	impl FunctionOptions for Seed {}

	#[derive(Debug)]
	struct Unit;

	impl FunctionOptions for Unit {}

	#[test]
	fn test_downcast_borrows_from_options() {
		let boxed: Box<dyn FunctionOptions> = Box::new(Seed(7));
		let seed: Option<&Seed> = downcast(boxed.as_ref());
		assert_eq!(seed, Some(&Seed(7)));
		assert!(downcast::<Unit>(boxed.as_ref()).is_none());
	}
}
