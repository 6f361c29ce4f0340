use crate::core::formatter::render_ranking;
use crate::core::parser::read_table;
use crate::core::ranking::create_ranking;
use crate::core::{ConfigProvider, Pipeline, PrefectureTable, Printer, Ranking, Storage};
use crate::utils::error::Result;

pub struct RankingPipeline<S: Storage, C: ConfigProvider, P: Printer> {
    storage: S,
    config: C,
    printer: P,
}

impl<S: Storage, C: ConfigProvider, P: Printer> RankingPipeline<S, C, P> {
    pub fn new(storage: S, config: C, printer: P) -> Self {
        Self {
            storage,
            config,
            printer,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, P: Printer> Pipeline for RankingPipeline<S, C, P> {
    async fn extract(&self) -> Result<PrefectureTable> {
        let path = self.config.input_path();
        tracing::debug!("Reading population data from: {}", path);

        let data = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes", data.len());

        read_table(&data)
    }

    async fn transform(&self, table: PrefectureTable) -> Result<Ranking> {
        let ranking = create_ranking(table);

        let degenerate = ranking
            .entries
            .iter()
            .filter(|e| !e.data.change_ratio().is_finite())
            .count();
        if degenerate > 0 {
            tracing::warn!(
                "{} prefectures have no usable 2010 figure (ratio is inf or NaN)",
                degenerate
            );
        }

        Ok(ranking)
    }

    async fn load(&self, ranking: Ranking) -> Result<String> {
        let output = render_ranking(&ranking);
        self.printer.print(&output)?;
        Ok(output)
    }
}
