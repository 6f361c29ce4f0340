use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RankingEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RankingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract、transform、load，回傳輸出的排名字串
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting population ranking...");

        // Extract
        let table = self.pipeline.extract().await?;
        tracing::info!("Collected {} prefectures", table.len());

        // Transform
        let ranking = self.pipeline.transform(table).await?;
        tracing::info!("Ranked {} prefectures", ranking.len());

        // Load
        let output = self.pipeline.load(ranking).await?;
        tracing::debug!("Printed {} bytes", output.len());

        Ok(output)
    }
}
