use std::cmp::Ordering;

use crate::Fp32;

impl PartialEq for Fp32 {
    fn eq(&self, other: &Self) -> bool {
        // NaN is not equal to anything, itself included
        if self.is_nan() || other.is_nan() {
            return false;
        }
        // +0 and -0 are the same value with distinct bits
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.0 == other.0
    }
}

impl PartialOrd for Fp32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if self.is_zero() && other.is_zero() {
            return Some(Ordering::Equal);
        }
        let (sign_a, sign_b) = (self.sign(), other.sign());
        if sign_a != sign_b {
            // the negative operand is smaller regardless of magnitude
            return Some(if sign_a {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }
        // same sign: below the sign bit the pattern is monotonic in
        // magnitude, so compare bits, reversed for negatives
        if sign_a {
            Some(other.0.cmp(&self.0))
        } else {
            Some(self.0.cmp(&other.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Fp32;
    use std::cmp::Ordering;

    fn fp(v: f32) -> Fp32 {
        Fp32::from(v)
    }

    #[test]
    fn nan_is_unordered_with_everything() {
        let nan = Fp32::nan();
        for x in [nan, fp(0.0), fp(1.0), fp(-1.0), Fp32::infinity(false)] {
            assert!(nan.partial_cmp(&x).is_none());
            assert!(!(nan == x));
            assert!(nan != x);
            assert!(!(nan < x));
            assert!(!(nan <= x));
            assert!(!(nan > x));
            assert!(!(nan >= x));
            assert!(!(x < nan));
            assert!(!(x >= nan));
        }
        // also for a non-canonical NaN pattern
        let other = Fp32::from_bits(0xFF80_0001);
        assert!(!(other == other));
        assert!(!(other <= other));
    }

    #[test]
    fn signed_zeros_are_equal_but_bit_distinct() {
        let pos = Fp32::zero(false);
        let neg = Fp32::zero(true);
        assert!(pos == neg);
        assert_eq!(pos.partial_cmp(&neg), Some(Ordering::Equal));
        assert!(!(neg < pos));
        assert_ne!(pos.to_bits(), neg.to_bits());
    }

    #[test]
    fn ordering_follows_the_hardware() {
        let cases = [
            (1.0f32, 2.0f32),
            (2.0, 1.0),
            (1.5, 1.5),
            (-1.0, 1.0),
            (-0.0, 1.0),
            (-2.0, -1.0),
            (-1.0, -2.0),
            (1e-40, 1e-39),
            (1e-40, f32::MIN_POSITIVE),
            (f32::NEG_INFINITY, f32::MAX),
            (f32::MAX, f32::INFINITY),
            (f32::NEG_INFINITY, f32::INFINITY),
        ];
        for (a, b) in cases {
            assert_eq!(fp(a).partial_cmp(&fp(b)), a.partial_cmp(&b), "{a} vs {b}");
            assert_eq!(fp(a) < fp(b), a < b);
            assert_eq!(fp(a) <= fp(b), a <= b);
            assert_eq!(fp(a) > fp(b), a > b);
            assert_eq!(fp(a) >= fp(b), a >= b);
            assert_eq!(fp(a) == fp(b), a == b);
        }
    }

    #[test]
    fn negative_ordering_reverses_bit_growth() {
        // larger bits mean larger magnitude, hence smaller negatives
        let a = Fp32::from_bits(0x8000_0001);
        let b = Fp32::from_bits(0x8000_0002);
        assert!(b < a);
        assert!(a > b);
    }
}
