use std::env::args;

use anyhow::Context;
use fp32::Fp32;

fn inspect(arg: &str) -> anyhow::Result<()> {
    println!("{arg}:");
    let value = if let Some(hex) = arg.strip_prefix("0x") {
        let bits = u32::from_str_radix(hex, 16)
            .with_context(|| format!("not a 32-bit hex pattern: {arg}"))?;
        Fp32::from_bits(bits)
    } else {
        arg.parse::<Fp32>()
            .with_context(|| format!("not a float literal: {arg}"))?
    };
    print!("{}", value.describe());
    Ok(())
}

fn walkthrough() {
    println!("--- Construction ---");
    let pi = Fp32::from(3.14159f32);
    println!("pi = {pi}");
    print!("{}", pi.describe());

    println!("\n--- Arithmetic ---");
    let a = Fp32::from(2.5f32);
    let b = Fp32::from(1.5f32);
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / b = {}", a / b);

    println!("\n--- Special values ---");
    let inf = Fp32::infinity(false);
    let nan = Fp32::nan();
    let zero = Fp32::zero(false);
    println!("Positive Infinity: {inf} (hex: {})", inf.to_hex());
    println!("NaN: {nan} (hex: {})", nan.to_hex());
    println!("Zero: {zero} (hex: {})", zero.to_hex());

    println!("\n--- Division edge cases ---");
    let one = Fp32::from(1.0f32);
    let result = one / zero;
    println!("1.0 / 0.0 = {result} (is_infinity: {})", result.is_infinity());
    let result = zero / zero;
    println!("0.0 / 0.0 = {result} (is_nan: {})", result.is_nan());

    println!("\n--- Bit patterns ---");
    let values = [1.0f32, 2.0, 0.5, -1.0];
    for v in values {
        let fp = Fp32::from(v);
        println!("{v:<6} : {} : {}", fp.to_binary(), fp.to_hex());
    }

    println!("\n--- Precision limits ---");
    let large = Fp32::from(16777216.0f32); // 2^24
    let small = Fp32::from(1.0f32);
    println!("Large number: {large}");
    println!("Small number: {small}");
    println!("Large + Small = {}", large + small);

    println!("\n--- Subnormal numbers ---");
    let tiny = Fp32::from_bits(0x0000_0001);
    let least_normal = Fp32::from_bits(0x0080_0000);
    println!("Smallest subnormal:");
    println!("  Value: {}", tiny.to_f64());
    println!("  Binary: {}", tiny.to_binary());
    println!("  Is subnormal: {}", tiny.is_subnormal());
    println!("Smallest normal:");
    println!("  Value: {}", least_normal.to_f64());
    println!("  Binary: {}", least_normal.to_binary());
    println!("  Is normal: {}", least_normal.is_normal());
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = args().skip(1).collect();
    if args.is_empty() {
        walkthrough();
        return Ok(());
    }
    for arg in &args {
        inspect(arg)?;
    }
    Ok(())
}
