use crate::domain::model::{CatalogReport, InstitutionScrape};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Output sink for the finished workbook. Write-only: nothing is ever read
/// back during a one-shot run.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn request_delay(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<InstitutionScrape>>;
    async fn transform(&self, data: Vec<InstitutionScrape>) -> Result<CatalogReport>;
    async fn load(&self, report: CatalogReport) -> Result<String>;
}
