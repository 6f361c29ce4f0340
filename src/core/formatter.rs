use crate::domain::model::{Ranking, RankingEntry};
use std::fmt;

/// Change ratio as printed: infinities spelled `Infinity` / `-Infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeRatio(pub f64);

impl fmt::Display for ChangeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::INFINITY {
            f.write_str("Infinity")
        } else if self.0 == f64::NEG_INFINITY {
            f.write_str("-Infinity")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// `<prefecture>: <popu2010>=><popu2015> change-ratio:<ratio>`
pub fn format_entry(entry: &RankingEntry) -> String {
    format!(
        "{}: {}=>{} change-ratio:{}",
        entry.prefecture,
        entry.data.popu_2010,
        entry.data.popu_2015,
        ChangeRatio(entry.data.change_ratio())
    )
}

pub fn ranking_strings(ranking: &Ranking) -> Vec<String> {
    ranking.entries.iter().map(format_entry).collect()
}

/// 將排名整體輸出成一個列表字面值
pub fn render_ranking(ranking: &Ranking) -> String {
    format!("{:?}", ranking_strings(ranking))
}
