use std::fmt::{self, Write};
use std::num::FpCategory;
use std::str::FromStr;

use crate::{Fp32, MANTISSA_BITS};

impl fmt::Display for Fp32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl FromStr for Fp32 {
    type Err = std::num::ParseFloatError;

    /// Parses a decimal float literal; text-to-bits is the platform
    /// parser's job, the result is reinterpreted bit-for-bit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<f32>().map(Fp32::from)
    }
}

impl Fp32 {
    /// `"S EEEEEEEE MMMMMMMMMMMMMMMMMMMMMMM"`, most significant bit first.
    pub fn to_binary(self) -> String {
        format!(
            "{:01b} {:08b} {:023b}",
            self.to_bits() >> 31,
            self.exponent(),
            self.mantissa()
        )
    }

    pub fn to_hex(self) -> String {
        format!("0x{:08X}", self.to_bits())
    }

    fn class_name(self) -> &'static str {
        match self.classify() {
            FpCategory::Zero => "Zero",
            FpCategory::Subnormal => "Subnormal",
            FpCategory::Normal => "Normal",
            FpCategory::Infinite => "Infinity",
            FpCategory::Nan => "NaN",
        }
    }

    /// Multi-line component dump for inspection.
    pub fn describe(self) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = writeln!(out, "Binary: {}", self.to_binary());
        let _ = writeln!(out, "Hex: {}", self.to_hex());
        let _ = writeln!(out, "Sign: {}", self.sign() as u32);
        let _ = writeln!(
            out,
            "Exponent (biased): {} (0x{:X})",
            self.biased_exponent(),
            self.exponent()
        );
        let _ = writeln!(out, "Exponent (unbiased): {}", self.unbiased_exponent());
        let _ = writeln!(out, "Mantissa: 0x{:06X}", self.mantissa());
        let _ = writeln!(out, "Type: {}", self.class_name());
        if self.is_normal() || self.is_subnormal() {
            let implicit = (self.significand() >> MANTISSA_BITS) & 1;
            let _ = writeln!(out, "Implicit bit: {implicit}");
        }
        let _ = writeln!(out, "Decimal value: {}", self.to_f64());
        out
    }
}
