pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, StdoutPrinter};
pub use config::toml_config::{RankingConfig, DEFAULT_INPUT_PATH};
pub use crate::core::{etl::RankingEngine, pipeline::RankingPipeline};
pub use utils::error::{RankingError, Result};
