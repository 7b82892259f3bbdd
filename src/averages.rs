use polars::prelude::*;

/// Arithmetic mean of a numeric column, ignoring nulls. `None` when the
/// column holds no non-null values.
pub fn average(df: &DataFrame, column: &str) -> PolarsResult<Option<f64>> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    Ok(values.f64()?.mean())
}
