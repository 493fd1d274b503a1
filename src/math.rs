use crate::{Fp32, SIGN_MASK};

impl Fp32 {
    /// Clears the sign bit; never renormalizes.
    pub const fn abs(self) -> Self {
        Fp32::from_bits(self.to_bits() & !SIGN_MASK)
    }

    /// Square root, delegated to the native hardware implementation
    /// after the special cases are dealt with on the bits.
    pub fn sqrt(self) -> Self {
        if self.is_nan() {
            return Fp32::nan();
        }
        if self.is_negative() && !self.is_zero() {
            return Fp32::nan();
        }
        if self.is_zero() {
            // sqrt(-0) is -0
            return self;
        }
        if self.is_infinite() {
            return Fp32::infinity(false);
        }
        Fp32::from(self.to_f32().sqrt())
    }
}

#[cfg(test)]
mod tests {
    use crate::Fp32;

    fn fp(v: f32) -> Fp32 {
        Fp32::from(v)
    }

    #[test]
    fn abs_clears_the_sign_bit() {
        assert_eq!(fp(-1.5).abs().to_bits(), fp(1.5).to_bits());
        assert_eq!(fp(1.5).abs().to_bits(), fp(1.5).to_bits());
        assert_eq!(Fp32::zero(true).abs().to_bits(), 0x0000_0000);
        assert_eq!(Fp32::infinity(true).abs().to_bits(), 0x7F80_0000);
        // a NaN keeps its payload
        assert_eq!(Fp32::from_bits(0xFFC0_1234).abs().to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn sqrt_delegates_to_the_hardware() {
        for v in [4.0f32, 2.0, 0.25, 1e-20, 3.0e38, 1e-40] {
            assert_eq!(fp(v).sqrt().to_bits(), v.sqrt().to_bits(), "sqrt {v}");
        }
    }

    #[test]
    fn sqrt_special_cases() {
        assert!(Fp32::nan().sqrt().is_nan());
        assert!(fp(-1.0).sqrt().is_nan());
        assert!(Fp32::infinity(true).sqrt().is_nan());
        // zeros keep their sign
        assert_eq!(Fp32::zero(false).sqrt().to_bits(), 0x0000_0000);
        assert_eq!(Fp32::zero(true).sqrt().to_bits(), 0x8000_0000);
        assert_eq!(Fp32::infinity(false).sqrt().to_bits(), 0x7F80_0000);
    }
}
