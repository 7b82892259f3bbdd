use polars::prelude::*;

/// The rows holding the largest and smallest value of one numeric column.
pub struct Extremes {
    pub max: DataFrame,
    pub min: DataFrame,
}

/// Ties resolve to the first row in table order; nulls are skipped. A column
/// with no non-null values is an error.
pub fn extremes(df: &DataFrame, column: &str) -> PolarsResult<Extremes> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    let values = values.f64()?;

    let mut max: Option<(usize, f64)> = None;
    let mut min: Option<(usize, f64)> = None;
    for (idx, v) in values.into_iter().enumerate() {
        let Some(v) = v else { continue };
        match max {
            Some((_, m)) if v <= m => {}
            _ => max = Some((idx, v)),
        }
        match min {
            Some((_, m)) if v >= m => {}
            _ => min = Some((idx, v)),
        }
    }

    let (Some((hi, _)), Some((lo, _))) = (max, min) else {
        return Err(PolarsError::NoData(
            format!("column {column:?} has no non-null values").into(),
        ));
    };

    Ok(Extremes {
        max: df.slice(hi as i64, 1),
        min: df.slice(lo as i64, 1),
    })
}
