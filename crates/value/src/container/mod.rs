// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod fixed;
mod var;

pub use fixed::FixedContainer;
pub use var::VarContainer;
