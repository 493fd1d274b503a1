use std::num::FpCategory;

use crate::{Fp32, EXPONENT_MASK, MANTISSA_MASK, SIGN_MASK};

impl Fp32 {
    pub const fn is_zero(self) -> bool {
        self.0 & !SIGN_MASK == 0
    }

    pub const fn is_subnormal(self) -> bool {
        self.0 & EXPONENT_MASK == 0 && self.0 & MANTISSA_MASK != 0
    }

    pub const fn is_normal(self) -> bool {
        let exp = self.0 & EXPONENT_MASK;
        exp != 0 && exp != EXPONENT_MASK
    }

    pub const fn is_infinite(self) -> bool {
        self.0 & !SIGN_MASK == EXPONENT_MASK
    }

    /// Alias of [`Fp32::is_infinite`].
    pub const fn is_infinity(self) -> bool {
        self.is_infinite()
    }

    /// True for every NaN pattern, not just the canonical quiet one.
    pub const fn is_nan(self) -> bool {
        self.0 & EXPONENT_MASK == EXPONENT_MASK && self.0 & MANTISSA_MASK != 0
    }

    pub const fn is_finite(self) -> bool {
        self.0 & EXPONENT_MASK != EXPONENT_MASK
    }

    /// The five classes are mutually exclusive and cover every pattern.
    pub const fn classify(self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_infinite() {
            FpCategory::Infinite
        } else if self.is_zero() {
            FpCategory::Zero
        } else if self.is_subnormal() {
            FpCategory::Subnormal
        } else {
            FpCategory::Normal
        }
    }
}
