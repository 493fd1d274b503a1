use crate::{Fp32, EXPONENT_MAX, MANTISSA_BITS};

/// Round to nearest, ties to even. `shift` is the number of low bits to
/// drop; zero or negative means the value already carries no extra
/// precision and is returned unchanged.
pub(crate) fn round_to_nearest_even(value: u64, shift: i32) -> u64 {
    if shift <= 0 {
        return value;
    }
    let halfway = 1u64 << (shift - 1);
    let remainder = value & ((1u64 << shift) - 1);
    let mut result = value >> shift;
    if remainder > halfway {
        result += 1;
    } else if remainder == halfway && result & 1 == 1 {
        // tie: round up only when the kept low bit is odd
        result += 1;
    }
    result
}

/// Outcome of renormalization, consumed by a single packing step.
/// Every `(exp, sig)` pair maps onto exactly one variant, so the
/// normalizer cannot fall through without producing a value.
enum Normalized {
    Zero,
    Infinity,
    /// Mantissa with biased exponent 0.
    Subnormal(u32),
    /// Biased exponent in 1..=254 and a 24-bit significand whose
    /// implicit bit is dropped when packing.
    Normal(u8, u32),
}

fn renormalize(exp: i32, sig: u64) -> Normalized {
    if sig == 0 {
        return Normalized::Zero;
    }

    // land the leading 1 at the implicit-bit position (bit 23)
    let leading = 63 - sig.leading_zeros() as i32;
    let shift = leading - MANTISSA_BITS as i32;
    let exp = exp + shift;

    if exp >= EXPONENT_MAX {
        return Normalized::Infinity;
    }

    if exp <= 0 {
        // too small for a normal: shift further right until the value
        // is expressible with a zero biased exponent
        let denorm_shift = 1 - exp;
        let total = denorm_shift + shift;
        if total >= 64 {
            return Normalized::Zero;
        }
        let man = if total > 0 {
            round_to_nearest_even(sig, total) as u32
        } else {
            // deep cancellation left the leading bit low; exact
            (sig << -total) as u32
        };
        return if man == 0 {
            Normalized::Zero
        } else if man >> MANTISSA_BITS != 0 {
            // rounding carried into the implicit-bit position:
            // the result is the smallest normal
            Normalized::Normal(1, man)
        } else {
            Normalized::Subnormal(man)
        };
    }

    let mut exp = exp;
    let mut man = if shift > 0 {
        round_to_nearest_even(sig, shift)
    } else {
        // the value is exact, move the leading bit up to position 23
        sig << -shift
    };
    if man >> (MANTISSA_BITS + 1) != 0 {
        // rounding carry produced a 25th bit
        man >>= 1;
        exp += 1;
        if exp >= EXPONENT_MAX {
            return Normalized::Infinity;
        }
    }
    Normalized::Normal(exp as u8, man as u32)
}

/// Renormalize a computed significand and round to nearest even.
///
/// `exp` is the biased working exponent, with any guard-bit offset the
/// caller introduced already folded in; `sig` holds the full-precision
/// significand, so every bit that can influence rounding is still
/// present here.
pub(crate) fn normalize(sign: bool, exp: i32, sig: u64) -> Fp32 {
    match renormalize(exp, sig) {
        Normalized::Zero => Fp32::zero(sign),
        Normalized::Infinity => Fp32::infinity(sign),
        Normalized::Subnormal(man) => Fp32::pack(sign, 0, man),
        Normalized::Normal(exp, man) => Fp32::pack(sign, exp, man),
    }
}
