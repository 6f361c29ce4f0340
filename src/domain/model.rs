use indexmap::IndexMap;
use std::fmt;

pub const BASE_YEAR: i64 = 2010;
pub const TARGET_YEAR: i64 = 2015;

/// 人口數；欄位無法解析時為 `NotANumber`，在計算中以 NaN 傳遞
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Population {
    Count(i64),
    /// digit run too long for `i64`
    Approx(f64),
    NotANumber,
}

impl Population {
    pub fn as_f64(&self) -> f64 {
        match self {
            Population::Count(n) => *n as f64,
            Population::Approx(v) => *v,
            Population::NotANumber => f64::NAN,
        }
    }
}

impl Default for Population {
    fn default() -> Self {
        Population::Count(0)
    }
}

impl From<Option<i64>> for Population {
    fn from(value: Option<i64>) -> Self {
        value.map(Population::Count).unwrap_or(Population::NotANumber)
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Population::Count(n) => write!(f, "{}", n),
            Population::Approx(v) => write!(f, "{}", v),
            Population::NotANumber => f.write_str("NaN"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefectureData {
    pub popu_2010: Population,
    pub popu_2015: Population,
    /// `None` until the table is finalized
    pub change: Option<f64>,
}

impl PrefectureData {
    pub fn compute_change(&self) -> f64 {
        self.popu_2015.as_f64() / self.popu_2010.as_f64()
    }

    pub fn change_ratio(&self) -> f64 {
        self.change.unwrap_or_else(|| self.compute_change())
    }
}

/// 以都道府県名為 key 的集計表，保留首次出現的順序
#[derive(Debug, Clone, Default)]
pub struct PrefectureTable {
    entries: IndexMap<String, PrefectureData>,
}

impl PrefectureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the entry for `prefecture`, inserting a zeroed one on first sight.
    pub fn entry_mut(&mut self, prefecture: &str) -> &mut PrefectureData {
        self.entries.entry(prefecture.to_string()).or_default()
    }

    pub fn get(&self, prefecture: &str) -> Option<&PrefectureData> {
        self.entries.get(prefecture)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PrefectureData)> {
        self.entries.iter()
    }

    /// Compute every change ratio. Called once, after all input is consumed.
    pub fn finalize(&mut self) {
        for data in self.entries.values_mut() {
            data.change = Some(data.compute_change());
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.entries.values().all(|data| data.change.is_some())
    }
}

impl IntoIterator for PrefectureTable {
    type Item = (String, PrefectureData);
    type IntoIter = indexmap::map::IntoIter<String, PrefectureData>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub prefecture: String,
    pub data: PrefectureData,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    pub entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn prefectures(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.prefecture.as_str()).collect()
    }
}
