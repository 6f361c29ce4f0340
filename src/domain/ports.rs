use crate::domain::model::{PrefectureTable, Ranking};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait Printer: Send + Sync {
    fn print(&self, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<PrefectureTable>;
    async fn transform(&self, table: PrefectureTable) -> Result<Ranking>;
    async fn load(&self, ranking: Ranking) -> Result<String>;
}
