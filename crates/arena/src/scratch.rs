// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	alloc::Layout,
	cell::Cell,
	fmt::{Debug, Formatter},
	mem::{align_of, size_of},
	ptr::NonNull,
	slice,
	sync::Arc,
};

use bumpalo::Bump;
use tracing::{debug, instrument, trace};

use crate::{ArenaError, MemoryPool, Result, default_memory_pool};

/// Scratch buffer with a single bump cursor.
///
/// Regions returned by [`alloc`](Self::alloc) borrow the arena, so they cannot
/// outlive the next [`reset`](Self::reset) or [`init`](Self::init), both of
/// which take `&mut self`. An arena must not be shared between threads; it is
/// `Send` but not `Sync`.
pub struct ScratchArena {
	bump: Option<Bump>,
	capacity: usize,
	used: Cell<usize>,
	pool: Arc<dyn MemoryPool>,
}

impl ScratchArena {
	/// An uninitialized arena with zero capacity backed by an unlimited pool.
	pub fn new() -> Self {
		Self::with_pool(default_memory_pool())
	}

	pub fn with_pool(pool: Arc<dyn MemoryPool>) -> Self {
		Self {
			bump: None,
			capacity: 0,
			used: Cell::new(0),
			pool,
		}
	}

	/// Creates an arena from `pool` and initializes it with `capacity` bytes.
	pub fn with_capacity(pool: Arc<dyn MemoryPool>, capacity: usize) -> Result<Self> {
		let mut result = Self::with_pool(pool);
		result.init(capacity)?;
		Ok(result)
	}

	/// Allocates the backing buffer, replacing any previous one.
	///
	/// On failure the arena is left uninitialized and nothing stays reserved
	/// in the pool.
	#[instrument(name = "arena::scratch::init", level = "debug", skip(self))]
	pub fn init(&mut self, capacity: usize) -> Result<()> {
		self.release();

		self.pool.reserve(capacity)?;
		let bump = match Bump::try_with_capacity(capacity) {
			Ok(bump) => bump,
			Err(_) => {
				self.pool.release(capacity);
				return Err(ArenaError::AllocationFailure {
					requested: capacity,
				});
			}
		};

		self.bump = Some(bump);
		self.capacity = capacity;
		debug!(capacity, "scratch arena initialized");
		Ok(())
	}

	/// Borrows `size` zeroed bytes aligned to `alignment`.
	///
	/// The cursor advances by `size` rounded up to `alignment`.
	pub fn alloc(&self, size: usize, alignment: usize) -> Result<&mut [u8]> {
		if !alignment.is_power_of_two() {
			return Err(ArenaError::InvalidAlignment {
				alignment,
			});
		}

		let remaining = self.remaining();
		let padded = size.checked_next_multiple_of(alignment).ok_or(ArenaError::OutOfSpace {
			requested: size,
			remaining,
		})?;
		if padded > remaining {
			return Err(ArenaError::OutOfSpace {
				requested: padded,
				remaining,
			});
		}
		if size == 0 {
			return Ok(&mut []);
		}

		let Some(bump) = self.bump.as_ref() else {
			return Err(ArenaError::OutOfSpace {
				requested: padded,
				remaining,
			});
		};
		let layout = Layout::from_size_align(padded, alignment).map_err(|_| ArenaError::InvalidAlignment {
			alignment,
		})?;
		let ptr = bump.try_alloc_layout(layout).map_err(|_| ArenaError::AllocationFailure {
			requested: padded,
		})?;

		self.used.set(self.used.get() + padded);
		trace!(size, padded, used = self.used.get(), "scratch region allocated");

		// SAFETY: `ptr` points to a fresh allocation of `padded >= size` bytes owned by the
		// bump, which stays alive and unreset while `&self` is borrowed.
		unsafe {
			ptr.as_ptr().write_bytes(0, padded);
			Ok(slice::from_raw_parts_mut(ptr.as_ptr(), size))
		}
	}

	/// Borrows `len` default initialized elements of `T`.
	pub fn alloc_slice<T: Copy + Default>(&self, len: usize) -> Result<&mut [T]> {
		let bytes = size_of::<T>().checked_mul(len).ok_or(ArenaError::OutOfSpace {
			requested: usize::MAX,
			remaining: self.remaining(),
		})?;

		let ptr = if bytes == 0 {
			NonNull::<T>::dangling().as_ptr()
		} else {
			self.alloc(bytes, align_of::<T>())?.as_mut_ptr().cast::<T>()
		};

		// SAFETY: `ptr` is aligned for `T` and either dangling for a zero sized request or
		// valid for `len` elements. `T: Copy` so no drop is skipped.
		unsafe {
			for i in 0..len {
				ptr.add(i).write(T::default());
			}
			Ok(slice::from_raw_parts_mut(ptr, len))
		}
	}

	/// Rewinds the cursor to zero, keeping the capacity.
	pub fn reset(&mut self) {
		if let Some(bump) = self.bump.as_mut() {
			bump.reset();
		}
		trace!(released = self.used.get(), "scratch arena reset");
		self.used.set(0);
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn used(&self) -> usize {
		self.used.get()
	}

	pub fn remaining(&self) -> usize {
		self.capacity - self.used.get()
	}

	pub fn is_initialized(&self) -> bool {
		self.bump.is_some()
	}

	pub fn pool(&self) -> &Arc<dyn MemoryPool> {
		&self.pool
	}

	fn release(&mut self) {
		if self.bump.take().is_some() {
			self.pool.release(self.capacity);
		}
		self.capacity = 0;
		self.used.set(0);
	}
}

impl Default for ScratchArena {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for ScratchArena {
	fn drop(&mut self) {
		self.release();
	}
}

impl Debug for ScratchArena {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ScratchArena")
			.field("capacity", &self.capacity)
			.field("used", &self.used.get())
			.field("initialized", &self.is_initialized())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use rand::Rng;

	use super::*;
	use crate::SystemMemoryPool;

	mod init {
		use super::*;

		#[test]
		fn test_uninitialized_has_no_capacity() {
			let arena = ScratchArena::new();
			assert!(!arena.is_initialized());
			assert_eq!(arena.capacity(), 0);
			assert_eq!(
				arena.alloc(1, 1).unwrap_err(),
				ArenaError::OutOfSpace {
					requested: 1,
					remaining: 0
				}
			);
		}

		#[test]
		fn test_init_reserves_from_pool() {
			let pool = Arc::new(SystemMemoryPool::new());
			let mut arena = ScratchArena::with_pool(pool.clone());
			arena.init(256).unwrap();
			assert_eq!(pool.bytes_reserved(), 256);

			arena.init(64).unwrap();
			assert_eq!(pool.bytes_reserved(), 64);
			assert_eq!(arena.capacity(), 64);

			drop(arena);
			assert_eq!(pool.bytes_reserved(), 0);
		}

		#[test]
		fn test_init_over_pool_limit() {
			let pool = Arc::new(SystemMemoryPool::with_limit(100));
			let mut arena = ScratchArena::with_pool(pool.clone());
			arena.init(50).unwrap();

			let err = arena.init(101).unwrap_err();
			assert_eq!(
				err,
				ArenaError::AllocationFailure {
					requested: 101
				}
			);
			assert_eq!(err.code(), "ARENA_002");
			assert!(!arena.is_initialized());
			assert_eq!(pool.bytes_reserved(), 0);
		}
	}

	mod alloc {
		use super::*;

		#[test]
		fn test_cursor_rounds_up_to_alignment() {
			let arena = ScratchArena::with_capacity(default_memory_pool(), 64).unwrap();
			let region = arena.alloc(3, 8).unwrap();
			assert_eq!(region.len(), 3);
			assert_eq!(region.as_ptr() as usize % 8, 0);
			assert_eq!(arena.used(), 8);
			assert_eq!(arena.remaining(), 56);
		}

		#[test]
		fn test_regions_are_zeroed_and_disjoint() {
			let arena = ScratchArena::with_capacity(default_memory_pool(), 32).unwrap();
			let a = arena.alloc(16, 1).unwrap();
			let b = arena.alloc(16, 1).unwrap();
			assert!(a.iter().all(|byte| *byte == 0));
			a.fill(0xaa);
			assert!(b.iter().all(|byte| *byte == 0));
		}

		#[test]
		fn test_out_of_space() {
			let arena = ScratchArena::with_capacity(default_memory_pool(), 16).unwrap();
			arena.alloc(12, 4).unwrap();
			assert_eq!(
				arena.alloc(5, 4).unwrap_err(),
				ArenaError::OutOfSpace {
					requested: 8,
					remaining: 4
				}
			);
			assert_eq!(arena.used(), 12);
		}

		#[test]
		fn test_more_than_capacity_fails_immediately() {
			let arena = ScratchArena::with_capacity(default_memory_pool(), 128).unwrap();
			assert!(matches!(arena.alloc(129, 1), Err(ArenaError::OutOfSpace { .. })));
			assert_eq!(arena.used(), 0);
		}

		#[test]
		fn test_invalid_alignment() {
			let arena = ScratchArena::with_capacity(default_memory_pool(), 16).unwrap();
			assert_eq!(
				arena.alloc(4, 3).unwrap_err(),
				ArenaError::InvalidAlignment {
					alignment: 3
				}
			);
			assert_eq!(arena.alloc(4, 0).unwrap_err().code(), "ARENA_003");
		}

		#[test]
		fn test_zero_size() {
			let arena = ScratchArena::new();
			assert!(arena.alloc(0, 16).unwrap().is_empty());
			assert!(arena.alloc_slice::<u64>(0).unwrap().is_empty());
		}

		#[test]
		fn test_alloc_slice() {
			let arena = ScratchArena::with_capacity(default_memory_pool(), 64).unwrap();
			let values = arena.alloc_slice::<u32>(5).unwrap();
			assert_eq!(values, &[0; 5]);
			values[4] = 7;
			assert_eq!(arena.used(), 20);
			assert!(arena.alloc_slice::<u64>(6).is_err());
		}
	}

	mod reset {
		use super::*;

		#[test]
		fn test_full_capacity_after_reset() {
			let mut arena = ScratchArena::with_capacity(default_memory_pool(), 1024).unwrap();
			for _ in 0..3 {
				assert_eq!(arena.alloc(1024, 8).unwrap().len(), 1024);
				assert!(arena.alloc(1, 1).is_err());
				arena.reset();
				assert_eq!(arena.used(), 0);
				assert_eq!(arena.capacity(), 1024);
			}
		}

		#[test]
		fn test_random_requests_never_exceed_capacity() {
			let mut rng = rand::rng();
			let mut arena = ScratchArena::with_capacity(default_memory_pool(), 4096).unwrap();
			for _ in 0..32 {
				loop {
					let size = rng.random_range(0..512);
					let alignment = 1usize << rng.random_range(0..5);
					match arena.alloc(size, alignment) {
						Ok(region) => assert_eq!(region.len(), size),
						Err(ArenaError::OutOfSpace {
							..
						}) => break,
						Err(err) => panic!("unexpected error: {err}"),
					}
					assert!(arena.used() <= arena.capacity());
				}
				arena.reset();
			}
		}
	}
}
