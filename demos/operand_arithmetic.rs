//! Mixed-width integer arithmetic through operands
//!
//! Run with `RUST_LOG=gho=trace cargo run --example operand_arithmetic` to see
//! the wraparound and error traces.

use gho::prelude::*;
use num_bigint::BigInt;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> GhoResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // 50! does not fit any fixed width, the big destination absorbs it
    let mut factorial = BigInt::from(1);
    let mut accumulator = Operand::new(&mut factorial);
    for i in 1..=50i64 {
        accumulator.mul_i64(i)?;
    }
    info!("50! = {}", accumulator.to_gho_string());

    // Same computation into an i64 under both policies
    let mut checked = 1i64;
    let mut operand = Operand::<CheckedConfig>::with_config(&mut checked);
    match (1..=50i64).try_for_each(|i| operand.mul_i64(i)) {
        Ok(()) => info!("checked product fits: {}", checked),
        Err(error) => info!("checked product stopped at {}: {}", checked, error),
    }

    let mut wrapped = 1i64;
    let mut operand = Operand::<WrappingConfig>::with_config(&mut wrapped);
    for i in 1..=50i64 {
        operand.mul_i64(i)?;
    }
    info!("wrapped product: {}", wrapped);

    // Floor and truncating division differ on negative operands
    let numerator = -7i32;
    for divisor in [2i64, -2] {
        let mut floor_q = numerator;
        let mut trunc_q = numerator;
        Operand::new(&mut floor_q).floor_div_q_i64(divisor)?;
        Operand::new(&mut trunc_q).trunc_div_q_i64(divisor)?;
        info!("{} / {}: floor {} trunc {}", numerator, divisor, floor_q, trunc_q);
    }

    // Operands over values whose type is only known at runtime
    let mut values = vec![
        Integer::Int(12),
        Integer::Long(1 << 40),
        Integer::LongLong(i128::MAX / 3),
        Integer::Big(factorial),
    ];
    let gcd_with = Integer::Long(360);
    for value in &mut values {
        let tag = value.type_tag();
        value
            .as_operand::<DefaultConfig>()
            .gcd(&gcd_with.as_coperand::<DefaultConfig>())?;
        info!("gcd({:?}, 360) = {}", tag, value);
    }

    let mut rounded = BigInt::from(987_654_321);
    Operand::new(&mut rounded).pow_10_round()?;
    info!("987654321 rounds to {}", rounded);

    Ok(())
}
