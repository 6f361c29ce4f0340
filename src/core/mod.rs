pub mod etl;
pub mod formatter;
pub mod parser;
pub mod pipeline;
pub mod ranking;

pub use crate::domain::model::{PrefectureData, PrefectureTable, Ranking, RankingEntry};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Printer, Storage};
pub use crate::utils::error::Result;
