use std::ops::{Div, DivAssign};

use crate::normalize::normalize;
use crate::{Fp32, EXPONENT_BIAS, MANTISSA_BITS};

fn div_impl(a: Fp32, b: Fp32) -> Fp32 {
    if a.is_nan() || b.is_nan() {
        return Fp32::nan();
    }
    if a.is_infinite() {
        if b.is_infinite() {
            // inf / inf
            return Fp32::nan();
        }
        return Fp32::infinity(a.sign() != b.sign());
    }
    if b.is_infinite() {
        return Fp32::zero(a.sign() != b.sign());
    }
    if b.is_zero() {
        if a.is_zero() {
            // 0 / 0
            return Fp32::nan();
        }
        return Fp32::infinity(a.sign() != b.sign());
    }
    if a.is_zero() {
        return Fp32::zero(a.sign() != b.sign());
    }

    let sign = a.sign() != b.sign();

    // widen the dividend so the integer quotient keeps 23 fraction bits
    let sig = (a.significand() << MANTISSA_BITS) / b.significand();

    let exp = a.unbiased_exponent() - b.unbiased_exponent() + EXPONENT_BIAS;

    normalize(sign, exp, sig)
}

impl Div for Fp32 {
    type Output = Fp32;

    fn div(self, other: Fp32) -> Fp32 {
        div_impl(self, other)
    }
}

impl DivAssign for Fp32 {
    fn div_assign(&mut self, other: Fp32) {
        *self = *self / other;
    }
}
