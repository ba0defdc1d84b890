// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use reifydb_arena::{MemoryPool, SCRATCH_BYTES_PER_ROW, default_memory_pool};
use reifydb_hash::HardwareFlags;
use serde::{Deserialize, Serialize};

/// Configuration for kernel execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
	/// Scratch bytes reserved per row when kernels size their arena.
	pub scratch_bytes_per_row: usize,
	/// Allow SIMD code paths. When false the portable paths run regardless of
	/// detected hardware.
	pub simd: bool,
}

impl Default for ExecConfig {
	fn default() -> Self {
		Self {
			scratch_bytes_per_row: SCRATCH_BYTES_PER_ROW,
			simd: true,
		}
	}
}

/// Everything a kernel may need from its caller.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
	memory_pool: Arc<dyn MemoryPool>,
	hardware: HardwareFlags,
	config: ExecConfig,
}

impl ExecutionContext {
	/// Unlimited system pool, detected hardware, default config.
	pub fn new() -> Self {
		Self {
			memory_pool: default_memory_pool(),
			hardware: HardwareFlags::detect(),
			config: ExecConfig::default(),
		}
	}

	pub fn with_memory_pool(mut self, memory_pool: Arc<dyn MemoryPool>) -> Self {
		self.memory_pool = memory_pool;
		self
	}

	pub fn with_hardware(mut self, hardware: HardwareFlags) -> Self {
		self.hardware = hardware;
		self
	}

	pub fn with_config(mut self, config: ExecConfig) -> Self {
		self.config = config;
		self
	}

	pub fn memory_pool(&self) -> &Arc<dyn MemoryPool> {
		&self.memory_pool
	}

	pub fn hardware(&self) -> HardwareFlags {
		self.hardware
	}

	pub fn config(&self) -> &ExecConfig {
		&self.config
	}

	/// Hardware flags with SIMD masked off when the config disables it.
	pub fn hardware_hint(&self) -> HardwareFlags {
		if self.config.simd {
			self.hardware
		} else {
			HardwareFlags::none()
		}
	}
}

impl Default for ExecutionContext {
	fn default() -> Self {
		Self::new()
	}
}
