use polars::prelude::*;

use rustc_hash::FxHashMap as HashMap;

/// Multi-value fields (genres, cast, director) are pipe-joined strings.
/// This is the one place the encoding is split apart.
pub const TAG_DELIMITER: char = '|';

/// Occurrence count per distinct value of a delimiter-joined column,
/// most-frequent first. Ties keep first-appearance order; null rows and
/// empty segments contribute nothing.
pub fn tag_counts(df: &DataFrame, column: &str) -> PolarsResult<Vec<(String, u32)>> {
    let mut counts: HashMap<&str, u32> = HashMap::default();
    let mut order: Vec<&str> = Vec::new();

    for value in df.column(column)?.str()? {
        let Some(value) = value else { continue };
        for tag in value.split(TAG_DELIMITER) {
            if tag.is_empty() {
                continue;
            }
            let entry = counts.entry(tag).or_insert(0);
            if *entry == 0 {
                order.push(tag);
            }
            *entry += 1;
        }
    }

    let mut out: Vec<(String, u32)> = order
        .into_iter()
        .map(|tag| (tag.to_string(), counts[tag]))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(out)
}
