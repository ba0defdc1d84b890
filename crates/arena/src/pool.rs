// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::Debug,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use tracing::trace;

use crate::{ArenaError, Result};

/// Accounts for scratch memory handed to arenas.
pub trait MemoryPool: Debug + Send + Sync {
	/// Reserves `bytes`, failing with `AllocationFailure` if the pool limit
	/// would be exceeded. Nothing is reserved on failure.
	fn reserve(&self, bytes: usize) -> Result<()>;

	fn release(&self, bytes: usize);

	fn bytes_reserved(&self) -> usize;

	fn limit(&self) -> Option<usize>;
}

#[derive(Debug, Default)]
pub struct SystemMemoryPool {
	reserved: AtomicUsize,
	limit: Option<usize>,
}

impl SystemMemoryPool {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_limit(limit: usize) -> Self {
		Self {
			reserved: AtomicUsize::new(0),
			limit: Some(limit),
		}
	}
}

impl MemoryPool for SystemMemoryPool {
	fn reserve(&self, bytes: usize) -> Result<()> {
		let limit = self.limit.unwrap_or(usize::MAX);
		self.reserved
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
				current.checked_add(bytes).filter(|total| *total <= limit)
			})
			.map(|previous| trace!(bytes, reserved = previous + bytes, "memory reserved"))
			.map_err(|_| ArenaError::AllocationFailure {
				requested: bytes,
			})
	}

	fn release(&self, bytes: usize) {
		let _ = self.reserved.fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
			Some(current.saturating_sub(bytes))
		});
	}

	fn bytes_reserved(&self) -> usize {
		self.reserved.load(Ordering::Acquire)
	}

	fn limit(&self) -> Option<usize> {
		self.limit
	}
}

/// An unlimited pool.
pub fn default_memory_pool() -> Arc<dyn MemoryPool> {
	Arc::new(SystemMemoryPool::new())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_reserve_and_release() {
		let pool = SystemMemoryPool::new();
		pool.reserve(100).unwrap();
		pool.reserve(50).unwrap();
		assert_eq!(pool.bytes_reserved(), 150);
		pool.release(100);
		assert_eq!(pool.bytes_reserved(), 50);
		assert_eq!(pool.limit(), None);
	}

	#[test]
	fn test_limit() {
		let pool = SystemMemoryPool::with_limit(100);
		pool.reserve(60).unwrap();
		assert_eq!(
			pool.reserve(41),
			Err(ArenaError::AllocationFailure {
				requested: 41
			})
		);
		assert_eq!(pool.bytes_reserved(), 60);
		pool.reserve(40).unwrap();
		assert_eq!(pool.bytes_reserved(), 100);
	}

	#[test]
	fn test_release_saturates() {
		let pool = SystemMemoryPool::new();
		pool.reserve(10).unwrap();
		pool.release(20);
		assert_eq!(pool.bytes_reserved(), 0);
	}

	#[test]
	fn test_reserve_overflow() {
		let pool = SystemMemoryPool::new();
		pool.reserve(usize::MAX).unwrap();
		assert!(pool.reserve(1).is_err());
	}
}
