//! Vectors, matrices and type-erased values printed and read back

use gho::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> GhoResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut primes = Vector::<i64, CompactConfig>::with_config();
    for p in [2, 3, 5, 7, 11, 13] {
        primes.add(p);
    }
    primes.insert(1, 0)?;
    info!(
        "primes: {} (size {}, capacity {})",
        primes.to_gho_string(),
        primes.size(),
        primes.capacity()
    );

    let (words, rest) = Vector::<GhoString>::sread("{ gamma, alpha, beta } trailing")?;
    let mut sorted = words.clone();
    sorted.sort();
    info!("sorted {} into {}, left '{}'", words.to_gho_string(), sorted.to_gho_string(), rest);

    let mut grid = Matrix::<i32>::with_size(2, 3);
    for i in 0..grid.nb_row() {
        for j in 0..grid.nb_col() {
            grid.operand_at(i, j)?.set_i64((i * 10 + j) as i64)?;
        }
    }
    grid.add_col_before(0)?;
    grid.add_row_after(1)?;
    info!("grid:\n{}", grid.to_gho_string());

    // A heterogeneous record
    let mut record = Vector::<Any>::new();
    record.add(Any::from_value(GhoString::from("origin")));
    record.add(grid.row_vector(1)?.to_any());
    record.add(Any::from_value(42i64));
    record.add(Any::new());
    info!("record: {}", record.to_gho_string());

    if let Some(answer) = record.at_mut(2)?.downcast_mut::<i64>() {
        *answer += 1;
    }
    info!("record after edit: {}", record.to_gho_string());

    Ok(())
}
