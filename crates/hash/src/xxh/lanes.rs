// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! xxHash32 with seed 0 for inputs of at most eight bytes, eight rows at a time.
//!
//! Inputs this short never reach the stripe loop, so each lane reduces to the
//! tail rounds followed by the avalanche. Results equal the reference routine
//! bit for bit.

use std::mem::size_of;

use reifydb_value::NativeType;

const PRIME32_1: u32 = 0x9E3779B1;
const PRIME32_2: u32 = 0x85EBCA77;
const PRIME32_3: u32 = 0xC2B2AE3D;
const PRIME32_4: u32 = 0x27D4EB2F;
const PRIME32_5: u32 = 0x165667B1;

pub(crate) const LANES: usize = 8;

#[inline(always)]
fn avalanche(mut h: u32) -> u32 {
	h ^= h >> 15;
	h = h.wrapping_mul(PRIME32_2);
	h ^= h >> 13;
	h = h.wrapping_mul(PRIME32_3);
	h ^= h >> 16;
	h
}

#[inline(always)]
fn word(key: &[u8; 8], offset: usize) -> u32 {
	u32::from_le_bytes([key[offset], key[offset + 1], key[offset + 2], key[offset + 3]])
}

/// Single lane version, used for the rows left over after full groups.
#[inline(always)]
pub(crate) fn hash_short(key: &[u8; 8], width: usize) -> u32 {
	debug_assert!(width <= 8);
	let mut h = PRIME32_5.wrapping_add(width as u32);
	let mut offset = 0;
	while offset + 4 <= width {
		h = h.wrapping_add(word(key, offset).wrapping_mul(PRIME32_3)).rotate_left(17).wrapping_mul(PRIME32_4);
		offset += 4;
	}
	while offset < width {
		h = h.wrapping_add((key[offset] as u32).wrapping_mul(PRIME32_5)).rotate_left(11).wrapping_mul(PRIME32_1);
		offset += 1;
	}
	avalanche(h)
}

#[inline(always)]
fn hash_group<T: NativeType>(values: &[T], out: &mut [u32]) {
	let width = size_of::<T>();
	let keys: [[u8; 8]; LANES] = std::array::from_fn(|lane| values[lane].key_bytes());
	let mut h = [PRIME32_5.wrapping_add(width as u32); LANES];

	let mut offset = 0;
	while offset + 4 <= width {
		for lane in 0..LANES {
			h[lane] = h[lane]
				.wrapping_add(word(&keys[lane], offset).wrapping_mul(PRIME32_3))
				.rotate_left(17)
				.wrapping_mul(PRIME32_4);
		}
		offset += 4;
	}
	while offset < width {
		for lane in 0..LANES {
			h[lane] = h[lane]
				.wrapping_add((keys[lane][offset] as u32).wrapping_mul(PRIME32_5))
				.rotate_left(11)
				.wrapping_mul(PRIME32_1);
		}
		offset += 1;
	}

	for lane in 0..LANES {
		out[lane] = avalanche(h[lane]);
	}
}

#[inline(always)]
pub(crate) fn hash_fixed_lanes<T: NativeType>(values: &[T], out: &mut [u32]) {
	debug_assert_eq!(values.len(), out.len());
	debug_assert!(size_of::<T>() <= 8);

	let mut groups = values.chunks_exact(LANES);
	let mut outs = out.chunks_exact_mut(LANES);
	for (group, out) in (&mut groups).zip(&mut outs) {
		hash_group(group, out);
	}
	for (value, out) in groups.remainder().iter().zip(outs.into_remainder()) {
		*out = hash_short(&value.key_bytes(), size_of::<T>());
	}
}

/// # Safety
///
/// The running CPU must support AVX2.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn hash_fixed_avx2<T: NativeType>(values: &[T], out: &mut [u32]) {
	hash_fixed_lanes(values, out)
}

#[cfg(test)]
mod tests {
	use rand::Rng;

	use super::*;

	fn reference<T: NativeType>(value: T) -> u32 {
		xxhash_rust::xxh32::xxh32(&value.key_bytes()[..size_of::<T>()], 0)
	}

	fn check<T: NativeType>(values: Vec<T>) {
		let mut out = vec![0u32; values.len()];
		hash_fixed_lanes(&values, &mut out);
		for (value, hash) in values.iter().zip(&out) {
			assert_eq!(*hash, reference(*value), "{value:?}");
		}
	}

	#[test]
	fn test_hash_short_matches_reference() {
		for width in 0..=8 {
			let key = [1, 2, 3, 4, 5, 6, 7, 8];
			assert_eq!(hash_short(&key, width), xxhash_rust::xxh32::xxh32(&key[..width], 0), "width {width}");
		}
	}

	#[test]
	fn test_edge_values() {
		check(vec![i8::MIN, -1, 0, 1, i8::MAX]);
		check(vec![i16::MIN, -1, 0, 1, i16::MAX]);
		check(vec![i32::MIN, -1, 0, 1, i32::MAX, 42, 7, -7, 1000]);
		check(vec![i64::MIN, -1, 0, 1, i64::MAX]);
		check(vec![u64::MAX, 0, 1]);
		check(vec![f64::NAN, -0.0, 0.0, f64::INFINITY, 1.5]);
		check(vec![true, false, true]);
	}

	#[test]
	fn test_random_values_match_reference() {
		let mut rng = rand::rng();
		for len in [0, 1, 7, 8, 9, 63, 64, 1000] {
			check::<i32>((0..len).map(|_| rng.random()).collect());
			check::<u16>((0..len).map(|_| rng.random()).collect());
			check::<i64>((0..len).map(|_| rng.random()).collect());
			check::<f32>((0..len).map(|_| rng.random()).collect());
			check::<u8>((0..len).map(|_| rng.random()).collect());
		}
	}

	#[cfg(target_arch = "x86_64")]
	#[test]
	fn test_avx2_matches_portable() {
		if !std::arch::is_x86_feature_detected!("avx2") {
			return;
		}
		let values: Vec<i64> = (-500..500).map(|v| v * 7919).collect();
		let mut portable = vec![0u32; values.len()];
		let mut avx2 = vec![0u32; values.len()];
		hash_fixed_lanes(&values, &mut portable);
		// SAFETY: AVX2 support checked above.
		unsafe { hash_fixed_avx2(&values, &mut avx2) };
		assert_eq!(portable, avx2);
	}
}
