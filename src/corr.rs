use polars::prelude::*;

/// Pearson correlation between two numeric columns, over rows where both
/// values are present. `None` when fewer than two such rows exist or either
/// side has zero variance.
pub fn pearson(df: &DataFrame, a: &str, b: &str) -> PolarsResult<Option<f64>> {
    let xs = df.column(a)?.cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = df.column(b)?.cast(&DataType::Float64)?;
    let ys = ys.f64()?;

    let pairs: Vec<(f64, f64)> = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x?, y?)))
        .collect();
    if pairs.len() < 2 {
        return Ok(None);
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for &(x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return Ok(None);
    }
    Ok(Some(cov / (var_x * var_y).sqrt()))
}

#[cfg(test)]
mod test_corr {
    use super::*;

    #[test]
    fn self_correlation_is_one() -> PolarsResult<()> {
        let df = df!("budget_usd" => [10i64, 25, 40, 5])?;
        let r = pearson(&df, "budget_usd", "budget_usd")?.unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn perfect_inverse_is_minus_one() -> PolarsResult<()> {
        let df = df!(
            "budget_usd" => [1i64, 2, 3],
            "profit_usd" => [30i64, 20, 10],
        )?;
        let r = pearson(&df, "budget_usd", "profit_usd")?.unwrap();
        assert!((r + 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn rows_with_a_missing_side_are_excluded() -> PolarsResult<()> {
        let df = df!(
            "budget_usd" => [Some(1i64), Some(2), Some(100)],
            "runtime" => [Some(10i64), Some(20), None],
        )?;
        // Without the null row the remaining pairs are perfectly correlated.
        let r = pearson(&df, "budget_usd", "runtime")?.unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn constant_column_has_no_correlation() -> PolarsResult<()> {
        let df = df!(
            "budget_usd" => [5i64, 5, 5],
            "revenue_usd" => [1i64, 2, 3],
        )?;
        assert_eq!(pearson(&df, "budget_usd", "revenue_usd")?, None);
        Ok(())
    }
}
