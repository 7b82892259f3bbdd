use chrono::NaiveDate;
use polars::prelude::*;

/// Columns with no analytical value, removed before anything else runs.
/// Treated as configuration: only the ones actually present are dropped.
pub const DROP_COLUMNS: [&str; 11] = [
    "id",
    "imdb_id",
    "popularity",
    "budget_adj",
    "revenue_adj",
    "homepage",
    "keywords",
    "overview",
    "production_companies",
    "vote_count",
    "vote_average",
];

/// Release-date formats seen across dataset snapshots.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Transforms the raw table into the canonical cleaned schema.
///
/// After this returns, every row has `budget_usd > 0`, `revenue_usd > 0` and
/// `profit_usd = revenue_usd - budget_usd`; a runtime of zero is stored as
/// null instead and the row is kept. An unparseable release date aborts the
/// run rather than skipping the row.
pub fn clean(raw: &DataFrame) -> PolarsResult<DataFrame> {
    let rows_in = raw.height();

    let mut df = raw.drop_many(DROP_COLUMNS);

    // Exact-duplicate rows keep their first occurrence.
    df = df.unique_stable(None, UniqueKeepStrategy::First, None)?;

    for (name, dtype) in [
        ("budget", DataType::Int64),
        ("revenue", DataType::Int64),
        ("runtime", DataType::Int64),
        ("release_year", DataType::Int32),
    ] {
        let cast = df.column(name)?.cast(&dtype)?;
        df.with_column(cast)?;
    }

    // Zero is the missing sentinel for money and runtime columns.
    for name in ["budget", "revenue", "runtime"] {
        let nulled: Int64Chunked = df
            .column(name)?
            .i64()?
            .into_iter()
            .map(|v| v.filter(|&x| x != 0))
            .collect();
        df.with_column(nulled.into_series().with_name(name.into()))?;
    }

    // Rows without a usable budget or revenue carry no signal for the
    // money-based analyses; rows with a missing runtime stay.
    let keep: BooleanChunked = df
        .column("budget")?
        .i64()?
        .into_iter()
        .zip(df.column("revenue")?.i64()?)
        .map(|(b, r)| b.is_some_and(|b| b > 0) && r.is_some_and(|r| r > 0))
        .collect();
    df = df.filter(&keep)?;

    let parsed: Vec<Option<NaiveDate>> = df
        .column("release_date")?
        .str()?
        .into_iter()
        .map(|v| v.map(parse_release_date).transpose())
        .collect::<PolarsResult<_>>()?;
    let dates = DateChunked::from_naive_date_options("release_date".into(), parsed);
    df.with_column(dates.into_series())?;

    df.rename("budget", "budget_usd".into())?;
    df.rename("revenue", "revenue_usd".into())?;

    let profit: Int64Chunked = df
        .column("revenue_usd")?
        .i64()?
        .into_iter()
        .zip(df.column("budget_usd")?.i64()?)
        .map(|(r, b)| match (r, b) {
            (Some(r), Some(b)) => Some(r - b),
            _ => None,
        })
        .collect();
    df.insert_column(2, profit.into_series().with_name("profit_usd".into()))?;

    log::info!("cleaning kept {} of {} rows", df.height(), rows_in);
    Ok(df)
}

fn parse_release_date(s: &str) -> PolarsResult<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    Err(PolarsError::ComputeError(
        format!("unparseable release date {s:?}").into(),
    ))
}
