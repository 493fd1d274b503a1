use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::normalize::normalize;
use crate::{Fp32, EXPONENT_BIAS, GUARD_BITS, SIGN_MASK};

fn add_impl(a: Fp32, b: Fp32) -> Fp32 {
    // special cases never reach the normalizer
    if a.is_nan() || b.is_nan() {
        return Fp32::nan();
    }
    if a.is_infinite() {
        if b.is_infinite() && a.sign() != b.sign() {
            // inf - inf
            return Fp32::nan();
        }
        return a;
    }
    if b.is_infinite() {
        return b;
    }
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    let mut exp_a = a.unbiased_exponent();
    let exp_b = b.unbiased_exponent();

    // pre left shift for rounding
    let mut sig_a = a.significand() << GUARD_BITS;
    let mut sig_b = b.significand() << GUARD_BITS;

    // align the smaller exponent's significand; a gap past the
    // significand width cannot affect the rounded result
    if exp_a > exp_b {
        let diff = exp_a - exp_b;
        sig_b = if diff > 63 { 0 } else { sig_b >> diff };
    } else if exp_b > exp_a {
        let diff = exp_b - exp_a;
        sig_a = if diff > 63 { 0 } else { sig_a >> diff };
        exp_a = exp_b;
    }

    // equal signs add magnitudes; opposite signs subtract the smaller
    // magnitude, and the larger magnitude decides the sign
    let (sign, sig) = if a.sign() == b.sign() {
        (a.sign(), sig_a + sig_b)
    } else if sig_a >= sig_b {
        (a.sign(), sig_a - sig_b)
    } else {
        (b.sign(), sig_b - sig_a)
    };

    normalize(sign, exp_a + EXPONENT_BIAS - GUARD_BITS as i32, sig)
}

impl Add for Fp32 {
    type Output = Fp32;

    fn add(self, other: Fp32) -> Fp32 {
        add_impl(self, other)
    }
}

impl Sub for Fp32 {
    type Output = Fp32;

    fn sub(self, other: Fp32) -> Fp32 {
        add_impl(self, -other)
    }
}

impl Neg for Fp32 {
    type Output = Fp32;

    /// Flips the sign bit only; never renormalizes.
    fn neg(self) -> Fp32 {
        Fp32::from_bits(self.to_bits() ^ SIGN_MASK)
    }
}

impl AddAssign for Fp32 {
    fn add_assign(&mut self, other: Fp32) {
        *self = *self + other;
    }
}

impl SubAssign for Fp32 {
    fn sub_assign(&mut self, other: Fp32) {
        *self = *self - other;
    }
}
