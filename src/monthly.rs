use chrono::Datelike;
use polars::prelude::*;

/// Count of releases per calendar month; index 0 is January. Months with no
/// releases stay at zero.
pub fn releases_by_month(df: &DataFrame) -> PolarsResult<[u32; 12]> {
    let mut counts = [0u32; 12];
    for date in release_dates(df)?.as_date_iter() {
        if let Some(date) = date {
            counts[date.month0() as usize] += 1;
        }
    }
    Ok(counts)
}

/// Total profit per calendar month; index 0 is January.
pub fn profit_by_month(df: &DataFrame) -> PolarsResult<[i64; 12]> {
    let mut totals = [0i64; 12];
    for (date, profit) in release_dates(df)?
        .as_date_iter()
        .zip(df.column("profit_usd")?.i64()?)
    {
        if let (Some(date), Some(profit)) = (date, profit) {
            totals[date.month0() as usize] += profit;
        }
    }
    Ok(totals)
}

fn release_dates(df: &DataFrame) -> PolarsResult<&DateChunked> {
    df.column("release_date")?.as_materialized_series().date()
}

#[cfg(test)]
mod test_monthly {
    use super::*;
    use chrono::NaiveDate;

    fn frame() -> DataFrame {
        let dates = DateChunked::from_naive_date(
            "release_date".into(),
            [
                NaiveDate::from_ymd_opt(2010, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2011, 6, 15).unwrap(),
                NaiveDate::from_ymd_opt(2012, 12, 25).unwrap(),
            ],
        );
        let mut df = df!("profit_usd" => [100i64, 40, -10]).unwrap();
        df.with_column(dates.into_series()).unwrap();
        df
    }

    #[test]
    fn counts_cover_all_twelve_months() -> PolarsResult<()> {
        let counts = releases_by_month(&frame())?;
        assert_eq!(counts[5], 2); // June
        assert_eq!(counts[11], 1); // December
        assert_eq!(counts.iter().sum::<u32>(), 3);
        assert_eq!(counts[0], 0); // January has no releases
        Ok(())
    }

    #[test]
    fn profit_sums_per_month() -> PolarsResult<()> {
        let totals = profit_by_month(&frame())?;
        assert_eq!(totals[5], 140);
        assert_eq!(totals[11], -10);
        assert_eq!(totals[3], 0);
        Ok(())
    }
}
