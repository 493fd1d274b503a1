use std::ops::{Mul, MulAssign};

use crate::normalize::normalize;
use crate::{Fp32, EXPONENT_BIAS, MANTISSA_BITS};

fn mul_impl(a: Fp32, b: Fp32) -> Fp32 {
    if a.is_nan() || b.is_nan() {
        return Fp32::nan();
    }
    if a.is_infinite() || b.is_infinite() {
        if a.is_zero() || b.is_zero() {
            // 0 * inf
            return Fp32::nan();
        }
        return Fp32::infinity(a.sign() != b.sign());
    }
    if a.is_zero() || b.is_zero() {
        return Fp32::zero(a.sign() != b.sign());
    }

    let sign = a.sign() != b.sign();

    // 24-bit by 24-bit product, at most 48 bits; every bit that can
    // influence rounding survives into the normalizer
    let sig = a.significand() * b.significand();

    // the product carries twice the mantissa scaling, correct one width
    let exp = a.unbiased_exponent() + b.unbiased_exponent() + EXPONENT_BIAS - MANTISSA_BITS as i32;

    normalize(sign, exp, sig)
}

impl Mul for Fp32 {
    type Output = Fp32;

    fn mul(self, other: Fp32) -> Fp32 {
        mul_impl(self, other)
    }
}

impl MulAssign for Fp32 {
    fn mul_assign(&mut self, other: Fp32) {
        *self = *self * other;
    }
}
