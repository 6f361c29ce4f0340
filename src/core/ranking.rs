use crate::domain::model::{PrefectureTable, Ranking, RankingEntry};
use std::cmp::Ordering;

/// Descending order on change ratios.
///
/// `+inf` comes first and `NaN` last; two equal ratios (two `NaN`s included)
/// compare equal so a stable sort keeps their encounter order.
pub fn compare_change_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// 計算 2010-2015 年人口變化率並依變化率由大到小排序
pub fn create_ranking(mut table: PrefectureTable) -> Ranking {
    table.finalize();

    let mut entries: Vec<RankingEntry> = table
        .into_iter()
        .map(|(prefecture, data)| RankingEntry { prefecture, data })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| compare_change_desc(a.data.change_ratio(), b.data.change_ratio()));

    Ranking { entries }
}
