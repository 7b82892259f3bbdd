use polars::prelude::*;

use rustc_hash::FxHashMap as HashMap;

/// Total profit per release year, ascending by year.
pub struct YearlyProfit {
    pub totals: Vec<(i32, i64)>,
    /// Year with the largest total; ties go to the earliest year.
    pub best_year: i32,
}

pub fn profit_by_year(df: &DataFrame) -> PolarsResult<YearlyProfit> {
    let mut acc: HashMap<i32, i64> = HashMap::default();
    for (year, profit) in df
        .column("release_year")?
        .i32()?
        .into_iter()
        .zip(df.column("profit_usd")?.i64()?)
    {
        if let (Some(year), Some(profit)) = (year, profit) {
            *acc.entry(year).or_default() += profit;
        }
    }

    let mut totals: Vec<(i32, i64)> = acc.into_iter().collect();
    totals.sort_unstable_by_key(|&(year, _)| year);

    let mut best = *totals
        .first()
        .ok_or_else(|| PolarsError::NoData("no rows with a release year".into()))?;
    for &(year, total) in &totals[1..] {
        if total > best.1 {
            best = (year, total);
        }
    }

    Ok(YearlyProfit {
        best_year: best.0,
        totals,
    })
}

/// Count of releases per year, with the busiest and quietest years.
pub struct ProductionTrend {
    pub counts: Vec<(i32, u32)>,
    pub peak_year: i32,
    pub quietest_year: i32,
}

pub fn production_trend(df: &DataFrame) -> PolarsResult<ProductionTrend> {
    let mut acc: HashMap<i32, u32> = HashMap::default();
    for year in df.column("release_year")?.i32()? {
        if let Some(year) = year {
            *acc.entry(year).or_default() += 1;
        }
    }

    let mut counts: Vec<(i32, u32)> = acc.into_iter().collect();
    counts.sort_unstable_by_key(|&(year, _)| year);

    let first = *counts
        .first()
        .ok_or_else(|| PolarsError::NoData("no rows with a release year".into()))?;
    let mut peak = first;
    let mut quietest = first;
    for &(year, count) in &counts[1..] {
        if count > peak.1 {
            peak = (year, count);
        }
        if count < quietest.1 {
            quietest = (year, count);
        }
    }

    Ok(ProductionTrend {
        counts,
        peak_year: peak.0,
        quietest_year: quietest.0,
    })
}

#[cfg(test)]
mod test_yearly {
    use super::*;

    #[test]
    fn profit_sums_per_year() -> PolarsResult<()> {
        let df = df!(
            "release_year" => [2000i32, 2000, 2001],
            "profit_usd" => [100i64, 50, -20],
        )?;
        let yearly = profit_by_year(&df)?;
        assert_eq!(yearly.totals, vec![(2000, 150), (2001, -20)]);
        assert_eq!(yearly.best_year, 2000);
        Ok(())
    }

    #[test]
    fn best_year_tie_goes_to_earliest() -> PolarsResult<()> {
        let df = df!(
            "release_year" => [2005i32, 1999],
            "profit_usd" => [75i64, 75],
        )?;
        assert_eq!(profit_by_year(&df)?.best_year, 1999);
        Ok(())
    }

    #[test]
    fn trend_counts_and_extremes() -> PolarsResult<()> {
        let df = df!(
            "release_year" => [1990i32, 1990, 1990, 1995, 2000, 2000],
        )?;
        let trend = production_trend(&df)?;
        assert_eq!(trend.counts, vec![(1990, 3), (1995, 1), (2000, 2)]);
        assert_eq!(trend.peak_year, 1990);
        assert_eq!(trend.quietest_year, 1995);
        Ok(())
    }
}
