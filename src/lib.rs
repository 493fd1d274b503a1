//! Software emulation of the IEEE-754 binary32 format.
//!
//! `Fp32` wraps the raw 32-bit pattern and implements classification,
//! comparison and the four arithmetic operations directly on the bits,
//! with round-to-nearest-even as the only rounding mode. The native
//! `f32` is used solely as a bit-pattern source and as the delegate for
//! `sqrt`; it never carries the arithmetic.

mod add;
mod classify;
mod cmp;
mod div;
mod fmt;
mod math;
mod mul;
mod normalize;

/// An IEEE-754 single-precision value, represented by its bit pattern.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp32(u32);

pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
pub(crate) const EXPONENT_MASK: u32 = 0x7F80_0000;
pub(crate) const MANTISSA_MASK: u32 = 0x007F_FFFF;
pub(crate) const QUIET_BIT: u32 = 0x0040_0000;
pub(crate) const MANTISSA_BITS: u32 = 23;
pub(crate) const EXPONENT_BIAS: i32 = 127;
pub(crate) const EXPONENT_MAX: i32 = 255;
pub(crate) const GUARD_BITS: u32 = 3;

impl Fp32 {
    /// Reinterpret a raw bit pattern. Total: all 2^32 patterns are legal.
    pub const fn from_bits(bits: u32) -> Self {
        Fp32(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn zero(negative: bool) -> Self {
        Fp32(if negative { SIGN_MASK } else { 0 })
    }

    pub const fn infinity(negative: bool) -> Self {
        Fp32(if negative {
            SIGN_MASK | EXPONENT_MASK
        } else {
            EXPONENT_MASK
        })
    }

    /// The canonical quiet NaN.
    pub const fn nan() -> Self {
        Fp32(EXPONENT_MASK | QUIET_BIT)
    }

    /// Smallest x with 1.0 + x != 1.0, i.e. 2^-23.
    pub const fn epsilon() -> Self {
        Fp32(0x3400_0000)
    }

    pub const fn sign(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// The stored 8-bit exponent field.
    pub const fn exponent(self) -> u8 {
        ((self.0 & EXPONENT_MASK) >> MANTISSA_BITS) as u8
    }

    /// The 23-bit fraction field, without the implicit leading bit.
    pub const fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    pub const fn biased_exponent(self) -> i32 {
        self.exponent() as i32
    }

    /// The true exponent: field - 127 for normals; subnormals and zero
    /// share the fixed exponent 1 - 127 used for significand alignment.
    pub const fn unbiased_exponent(self) -> i32 {
        match self.exponent() {
            0 => 1 - EXPONENT_BIAS,
            e => e as i32 - EXPONENT_BIAS,
        }
    }

    pub const fn is_negative(self) -> bool {
        self.sign()
    }

    /// The working significand: mantissa with the implicit bit made
    /// explicit for normals, as-is for subnormals and zero.
    pub(crate) const fn significand(self) -> u64 {
        let man = self.mantissa() as u64;
        if self.is_normal() {
            man | 1 << MANTISSA_BITS
        } else {
            man
        }
    }

    pub(crate) const fn pack(sign: bool, exp: u8, man: u32) -> Self {
        Fp32(((sign as u32) << 31) | ((exp as u32) << MANTISSA_BITS) | (man & MANTISSA_MASK))
    }

    /// Bit-for-bit reinterpretation, never a numeric conversion.
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    pub fn to_f64(self) -> f64 {
        self.to_f32() as f64
    }
}

impl From<f32> for Fp32 {
    fn from(value: f32) -> Self {
        Fp32(value.to_bits())
    }
}

impl From<f64> for Fp32 {
    fn from(value: f64) -> Self {
        // narrow through the native conversion, then take the bits
        Fp32::from(value as f32)
    }
}

impl From<i32> for Fp32 {
    fn from(value: i32) -> Self {
        Fp32::from(value as f32)
    }
}

#[cfg(test)]
mod tests {
    use crate::Fp32;

    #[test]
    fn roundtrip_bits() {
        for v in [
            0.0f32,
            -0.0,
            1.0,
            -1.0,
            1.5,
            -2.5,
            3.14159,
            16777216.0,
            f32::MIN_POSITIVE,
            f32::MAX,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            f32::from_bits(0x0000_0001),
            f32::from_bits(0x8000_0001),
            f32::from_bits(0x007F_FFFF),
        ] {
            assert_eq!(Fp32::from(v).to_f32().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn field_access() {
        let one = Fp32::from(1.0f32);
        assert!(!one.sign());
        assert_eq!(one.exponent(), 127);
        assert_eq!(one.mantissa(), 0);
        assert_eq!(one.unbiased_exponent(), 0);

        let half = Fp32::from(-0.5f32);
        assert!(half.sign());
        assert_eq!(half.exponent(), 126);
        assert_eq!(half.unbiased_exponent(), -1);

        // subnormals and zero share the alignment exponent
        assert_eq!(Fp32::from_bits(1).unbiased_exponent(), -126);
        assert_eq!(Fp32::zero(false).unbiased_exponent(), -126);
    }

    #[test]
    fn named_constructors() {
        assert_eq!(Fp32::zero(false).to_bits(), 0x0000_0000);
        assert_eq!(Fp32::zero(true).to_bits(), 0x8000_0000);
        assert_eq!(Fp32::infinity(false).to_bits(), 0x7F80_0000);
        assert_eq!(Fp32::infinity(true).to_bits(), 0xFF80_0000);
        assert_eq!(Fp32::nan().to_bits(), 0x7FC0_0000);
        assert_eq!(Fp32::epsilon().to_bits(), 0x3400_0000);
        assert_eq!(Fp32::epsilon().biased_exponent(), 104);
    }

    #[test]
    fn narrowing_constructors() {
        assert_eq!(Fp32::from(2.5f64).to_bits(), 2.5f32.to_bits());
        assert_eq!(Fp32::from(7i32).to_bits(), 7.0f32.to_bits());
        // a double that does not fit exactly narrows like the platform does
        assert_eq!(Fp32::from(0.1f64).to_bits(), 0.1f32.to_bits());
    }

    #[test]
    fn epsilon_is_the_ulp_of_one() {
        let one = Fp32::from(1.0f32);
        assert!(one + Fp32::epsilon() != one);
        let half_eps = Fp32::from(2.0f32.powi(-24));
        assert!(one + half_eps == one);
    }
}
