use polars::prelude::*;

/// Default ranking depth for the report.
pub const TOP_N: usize = 20;

/// The `n` largest values of a numeric column paired with the movie title,
/// descending. Ties keep original row order; fewer than `n` usable rows
/// returns them all.
pub fn top_n(df: &DataFrame, column: &str, n: usize) -> PolarsResult<Vec<(String, f64)>> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    let values = values.f64()?;
    let titles = df.column("original_title")?.str()?;

    let mut rows: Vec<(usize, &str, f64)> = values
        .into_iter()
        .zip(titles)
        .enumerate()
        .filter_map(|(idx, (value, title))| match (value, title) {
            (Some(v), Some(t)) => Some((idx, t, v)),
            _ => None,
        })
        .collect();
    // Stable sort keeps earlier rows first among equal values.
    rows.sort_by(|a, b| b.2.total_cmp(&a.2));
    rows.truncate(n);

    Ok(rows
        .into_iter()
        .map(|(_, title, value)| (title.to_string(), value))
        .collect())
}

#[cfg(test)]
mod test_top {
    use super::*;

    #[test]
    fn descending_with_ties_in_row_order() -> PolarsResult<()> {
        let df = df!(
            "original_title" => ["A", "B", "C"],
            "revenue_usd" => [10i64, 30, 20],
        )?;
        let top = top_n(&df, "revenue_usd", 2)?;
        assert_eq!(
            top,
            vec![("B".to_string(), 30.0), ("C".to_string(), 20.0)]
        );
        Ok(())
    }

    #[test]
    fn tie_keeps_first_row_first() -> PolarsResult<()> {
        let df = df!(
            "original_title" => ["Early", "Late"],
            "revenue_usd" => [20i64, 20],
        )?;
        let top = top_n(&df, "revenue_usd", 2)?;
        assert_eq!(top[0].0, "Early");
        assert_eq!(top[1].0, "Late");
        Ok(())
    }

    #[test]
    fn short_table_returns_everything() -> PolarsResult<()> {
        let df = df!(
            "original_title" => ["Only"],
            "revenue_usd" => [5i64],
        )?;
        assert_eq!(top_n(&df, "revenue_usd", 20)?.len(), 1);
        Ok(())
    }
}
