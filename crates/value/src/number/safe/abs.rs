// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use num_traits::{CheckedNeg, WrappingNeg};

/// Absolute value under the three overflow policies.
///
/// Only signed integers can overflow: the most negative value has no positive
/// counterpart.
pub trait SafeAbs: Sized {
	fn checked_abs(&self) -> Option<Self>;
	fn saturating_abs(&self) -> Self;
	fn wrapping_abs(&self) -> Self;
}

macro_rules! impl_safe_abs_signed {
    ($($t:ty),*) => {
        $(
            impl SafeAbs for $t {
                fn checked_abs(&self) -> Option<Self> {
                    if *self < 0 {
                        CheckedNeg::checked_neg(self)
                    } else {
                        Some(*self)
                    }
                }
                fn saturating_abs(&self) -> Self {
                    if *self < 0 {
                        CheckedNeg::checked_neg(self).unwrap_or(<$t>::MAX)
                    } else {
                        *self
                    }
                }
                fn wrapping_abs(&self) -> Self {
                    if *self < 0 {
                        WrappingNeg::wrapping_neg(self)
                    } else {
                        *self
                    }
                }
            }
        )*
    };
}

macro_rules! impl_safe_abs_unsigned {
    ($($t:ty),*) => {
        $(
            impl SafeAbs for $t {
                fn checked_abs(&self) -> Option<Self> {
                    Some(*self)
                }
                fn saturating_abs(&self) -> Self {
                    *self
                }
                fn wrapping_abs(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

macro_rules! impl_safe_abs_float {
    ($($t:ty),*) => {
        $(
            impl SafeAbs for $t {
                fn checked_abs(&self) -> Option<Self> {
                    Some(self.wrapping_abs())
                }
                fn saturating_abs(&self) -> Self {
                    self.wrapping_abs()
                }
                fn wrapping_abs(&self) -> Self {
                    if *self < 0.0 { -*self } else { *self }
                }
            }
        )*
    };
}

impl_safe_abs_signed!(i8, i16, i32, i64);
impl_safe_abs_unsigned!(u8, u16, u32, u64);
impl_safe_abs_float!(f32, f64);
