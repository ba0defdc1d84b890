// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Named compute functions and kernel dispatch.
//!
//! A [`FunctionRegistry`] maps names to [`Function`]s. Each function owns an
//! ordered list of [`Kernel`]s; a call picks the first kernel whose
//! [`InputSignature`] equals the (type, shape) of the actual arguments and runs
//! it with a [`KernelContext`].

mod arity;
mod context;
mod doc;
mod error;
mod exec;
mod function;
mod kernel;
mod options;
mod registry;
mod signature;

pub use arity::Arity;
pub use context::{ExecConfig, ExecutionContext};
pub use doc::FunctionDoc;
pub use error::{CallError, FunctionError, RegisterError};
pub use function::{Function, FunctionKind};
pub use kernel::{ExecSpan, ExecValue, Kernel, KernelContext, KernelExec};
pub use options::FunctionOptions;
pub use registry::FunctionRegistry;
pub use signature::InputSignature;
