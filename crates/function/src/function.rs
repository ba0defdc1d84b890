// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use reifydb_value::{ChunkedColumn, Datum, ValueDescr};
use tracing::{instrument, trace};

use crate::{
	arity::Arity,
	context::ExecutionContext,
	doc::FunctionDoc,
	error::{CallError, FunctionError, RegisterError},
	exec::{Layout, layout},
	kernel::{Kernel, KernelContext},
	options::FunctionOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
	// select abs(-1)
	Scalar,
	// from test.table select index(num)
	Aggregate,
}

impl Display for FunctionKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let label = match self {
			FunctionKind::Scalar => "Scalar",
			FunctionKind::Aggregate => "Aggregate",
		};
		write!(f, "{}", label)
	}
}

/// A named, arity checked set of kernels.
///
/// Kernels are kept in insertion order, which is also dispatch priority.
#[derive(Debug, Clone)]
pub struct Function {
	name: String,
	kind: FunctionKind,
	arity: Arity,
	doc: FunctionDoc,
	kernels: Vec<Kernel>,
	default_options: Option<Arc<dyn FunctionOptions>>,
}

impl Function {
	pub fn new(name: impl Into<String>, kind: FunctionKind, arity: Arity, doc: FunctionDoc) -> Self {
		Self {
			name: name.into(),
			kind,
			arity,
			doc,
			kernels: Vec::new(),
			default_options: None,
		}
	}

	pub fn scalar(name: impl Into<String>, arity: Arity, doc: FunctionDoc) -> Self {
		Self::new(name, FunctionKind::Scalar, arity, doc)
	}

	pub fn aggregate(name: impl Into<String>, arity: Arity, doc: FunctionDoc) -> Self {
		Self::new(name, FunctionKind::Aggregate, arity, doc)
	}

	/// Options used when a call passes none.
	pub fn with_default_options(mut self, options: impl FunctionOptions) -> Self {
		self.default_options = Some(Arc::new(options));
		self
	}

	/// Appends `kernel`, which then loses ties to every kernel added before it.
	pub fn add_kernel(&mut self, kernel: Kernel) -> Result<(), RegisterError> {
		let inputs = kernel.signature().len();
		if !self.arity.accepts(inputs) {
			return Err(RegisterError::SignatureArity {
				function: self.name.clone(),
				arity: self.arity,
				actual: inputs,
			});
		}
		self.kernels.push(kernel);
		Ok(())
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> FunctionKind {
		self.kind
	}

	pub fn arity(&self) -> Arity {
		self.arity
	}

	pub fn doc(&self) -> &FunctionDoc {
		&self.doc
	}

	pub fn kernels(&self) -> &[Kernel] {
		&self.kernels
	}

	pub fn default_options(&self) -> Option<&dyn FunctionOptions> {
		self.default_options.as_deref()
	}

	/// First kernel, in insertion order, whose signature equals `args`.
	pub fn dispatch_exact(&self, args: &[ValueDescr]) -> Option<&Kernel> {
		self.kernels.iter().find(|kernel| kernel.matches(args))
	}

	/// Validates arity, dispatches and runs the selected kernel.
	#[instrument(name = "function::execute", level = "trace", skip_all, fields(function = %self.name))]
	pub fn execute(
		&self,
		args: &[Datum],
		options: Option<&dyn FunctionOptions>,
		ctx: &ExecutionContext,
	) -> Result<Datum, CallError> {
		if !self.arity.accepts(args.len()) {
			return Err(CallError::ArityMismatch {
				function: self.name.clone(),
				expected: self.arity,
				actual: args.len(),
			});
		}

		let layout = layout(&self.name, self.kind, args)?;

		let mut descrs = Vec::with_capacity(args.len());
		for arg in args {
			// record batches were rejected by `layout`
			descrs.extend(arg.descr());
		}
		let Some((index, kernel)) = self.kernels.iter().enumerate().find(|(_, kernel)| kernel.matches(&descrs))
		else {
			return Err(CallError::NoMatchingKernel {
				function: self.name.clone(),
				args: descrs,
			});
		};
		trace!(kernel = index, signature = %kernel.signature(), "kernel selected");

		let options = options.or(self.default_options());
		let mut kernel_ctx = KernelContext::new(&self.name, ctx, options);

		self.run(kernel, &mut kernel_ctx, layout).map_err(|source| CallError::KernelFailure {
			function: self.name.clone(),
			source,
		})
	}

	fn run(&self, kernel: &Kernel, ctx: &mut KernelContext<'_>, layout: Layout<'_>) -> Result<Datum, FunctionError> {
		match layout {
			Layout::Single(span) => {
				let mut out = Datum::Null;
				kernel.exec(ctx, &span, &mut out)?;
				verify_output(kernel, &out)?;
				Ok(out)
			}
			Layout::Chunked(spans) => {
				let mut chunks = Vec::with_capacity(spans.len());
				for span in &spans {
					let mut out = Datum::Null;
					kernel.exec(ctx, span, &mut out)?;
					verify_output(kernel, &out)?;
					match out {
						Datum::Column(column) => chunks.push(column),
						other => {
							return Err(FunctionError::internal(format!(
								"kernel of {} returned {:?} for a chunk",
								self.name,
								other.descr()
							)));
						}
					}
				}
				Ok(Datum::ChunkedColumn(ChunkedColumn::try_new(kernel.output(), chunks)?))
			}
		}
	}
}

fn verify_output(kernel: &Kernel, out: &Datum) -> Result<(), FunctionError> {
	match out.get_type() {
		Some(ty) if ty == kernel.output() => Ok(()),
		actual => Err(FunctionError::internal(format!(
			"kernel declared output {} but produced {:?}",
			kernel.output(),
			actual
		))),
	}
}

#[cfg(test)]
mod tests {
	use reifydb_value::{ColumnData, Type, Value};

	use super::*;
	use crate::{
		kernel::{ExecSpan, ExecValue},
		signature::InputSignature,
	};

	fn tag_a(_: &mut KernelContext<'_>, _: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
		*out = Datum::Scalar(Value::utf8("a"));
		Ok(())
	}

	fn tag_b(_: &mut KernelContext<'_>, _: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
		*out = Datum::Scalar(Value::utf8("b"));
		Ok(())
	}

	fn negate(_: &mut KernelContext<'_>, span: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
		*out = match span.value(0)? {
			ExecValue::Column(ColumnData::Int4(c)) => {
				Datum::Column(ColumnData::int4(c.iter().map(|v| v.wrapping_neg()).collect::<Vec<_>>()))
			}
			_ => return Err(FunctionError::invalid("int4 column expected")),
		};
		Ok(())
	}

	fn wrong_type(_: &mut KernelContext<'_>, _: &ExecSpan<'_>, out: &mut Datum) -> Result<(), FunctionError> {
		*out = Datum::Scalar(Value::Int8(1));
		Ok(())
	}

	fn doc() -> FunctionDoc {
		FunctionDoc::new("test", "test function", ["x"])
	}

	mod add_kernel {
		use super::*;

		#[test]
		fn test_signature_must_fit_arity() {
			let mut function = Function::scalar("f", Arity::unary(), doc());
			let err = function
				.add_kernel(Kernel::new(
					InputSignature::new([ValueDescr::scalar(Type::Int4), ValueDescr::scalar(Type::Int4)]),
					Type::Utf8,
					tag_a,
				))
				.unwrap_err();
			assert_eq!(
				err,
				RegisterError::SignatureArity {
					function: "f".to_string(),
					arity: Arity::unary(),
					actual: 2
				}
			);
			assert!(function.kernels().is_empty());
		}
	}

	mod dispatch {
		use super::*;

		#[test]
		fn test_first_match_wins() {
			let mut function = Function::scalar("f", Arity::unary(), doc());
			function.add_kernel(Kernel::new(InputSignature::scalar(Type::Int4), Type::Utf8, tag_a)).unwrap();
			function.add_kernel(Kernel::new(InputSignature::scalar(Type::Int4), Type::Utf8, tag_b)).unwrap();

			let ctx = ExecutionContext::new();
			for _ in 0..3 {
				let result = function.execute(&[Datum::from(Value::Int4(1))], None, &ctx).unwrap();
				assert_eq!(result, Datum::Scalar(Value::utf8("a")));
			}
		}

		#[test]
		fn test_no_coercion() {
			let mut function = Function::scalar("f", Arity::unary(), doc());
			function.add_kernel(Kernel::new(InputSignature::scalar(Type::Int4), Type::Utf8, tag_a)).unwrap();

			let err = function.execute(&[Datum::from(Value::Int8(1))], None, &ExecutionContext::new()).unwrap_err();
			assert_eq!(
				err,
				CallError::NoMatchingKernel {
					function: "f".to_string(),
					args: vec![ValueDescr::scalar(Type::Int8)],
				}
			);
			assert!(function.dispatch_exact(&[ValueDescr::column(Type::Int4)]).is_none());
		}

		#[test]
		fn test_arity_checked_before_dispatch() {
			let function = Function::scalar("f", Arity::unary(), doc());
			let err = function.execute(&[], None, &ExecutionContext::new()).unwrap_err();
			assert!(matches!(err, CallError::ArityMismatch { actual: 0, .. }));
		}
	}

	mod execute {
		use super::*;

		#[test]
		fn test_chunked_runs_per_chunk() {
			let mut function = Function::scalar("neg", Arity::unary(), doc());
			function.add_kernel(Kernel::new(InputSignature::column(Type::Int4), Type::Int4, negate)).unwrap();

			let chunked = ChunkedColumn::try_new(
				Type::Int4,
				vec![ColumnData::int4(vec![1, 2]), ColumnData::int4(vec![3])],
			)
			.unwrap();
			let result = function.execute(&[Datum::from(chunked)], None, &ExecutionContext::new()).unwrap();

			let expected = ChunkedColumn::try_new(
				Type::Int4,
				vec![ColumnData::int4(vec![-1, -2]), ColumnData::int4(vec![-3])],
			)
			.unwrap();
			assert_eq!(result, Datum::ChunkedColumn(expected));
		}

		#[test]
		fn test_output_type_verified() {
			let mut function = Function::scalar("f", Arity::unary(), doc());
			function.add_kernel(Kernel::new(InputSignature::scalar(Type::Int4), Type::Int4, wrong_type)).unwrap();

			let err = function.execute(&[Datum::from(Value::Int4(1))], None, &ExecutionContext::new()).unwrap_err();
			assert!(matches!(
				err,
				CallError::KernelFailure {
					source: FunctionError::Internal { .. },
					..
				}
			));
		}

		#[test]
		fn test_kernel_error_wrapped() {
			let mut function = Function::scalar("neg", Arity::unary(), doc());
			function.add_kernel(Kernel::new(InputSignature::column(Type::Int8), Type::Int8, negate)).unwrap();

			let err = function
				.execute(&[Datum::from(ColumnData::int8(vec![1]))], None, &ExecutionContext::new())
				.unwrap_err();
			assert_eq!(
				err,
				CallError::KernelFailure {
					function: "neg".to_string(),
					source: FunctionError::invalid("int4 column expected"),
				}
			);
		}
	}
}
