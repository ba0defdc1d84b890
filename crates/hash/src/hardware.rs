// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// CPU features a caller allows the hash engine to use.
///
/// A flag only takes effect when the running CPU also supports the feature,
/// so hand-built flags are always safe to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardwareFlags {
	pub avx2: bool,
}

impl HardwareFlags {
	/// Features of the running CPU.
	pub fn detect() -> Self {
		Self {
			avx2: avx2_supported(),
		}
	}

	/// Portable code paths only.
	pub fn none() -> Self {
		Self {
			avx2: false,
		}
	}

	pub fn use_avx2(&self) -> bool {
		self.avx2 && avx2_supported()
	}
}

#[cfg(target_arch = "x86_64")]
fn avx2_supported() -> bool {
	std::arch::is_x86_feature_detected!("avx2")
}

#[cfg(not(target_arch = "x86_64"))]
fn avx2_supported() -> bool {
	false
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_none_disables_everything() {
		assert!(!HardwareFlags::none().use_avx2());
		assert_eq!(HardwareFlags::none(), HardwareFlags::default());
	}

	#[test]
	fn test_detect_is_usable() {
		let flags = HardwareFlags::detect();
		assert_eq!(flags.use_avx2(), flags.avx2);
	}
}
