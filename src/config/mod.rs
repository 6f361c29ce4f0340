pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "popu-ranking")]
#[command(about = "Rank prefectures by population change ratio between 2010 and 2015")]
pub struct CliConfig {
    /// Optional TOML configuration file; without it the input is ./popu-pref.csv
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
