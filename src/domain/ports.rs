use crate::domain::model::{Canteen, RenderedMenu};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the weekly CSV comes from. Returns the decoded text split into lines.
pub trait FeedSource: Send + Sync {
    fn fetch_lines(
        &self,
        canteen: &Canteen,
        week: u32,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

/// Where rendered lines go.
pub trait Output: Send + Sync {
    fn write_lines(&self, lines: &[String])
        -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn url_template(&self) -> &str;
    fn default_canteen(&self) -> &str;
    fn canteen(&self, key: &str) -> Option<Canteen>;
    fn canteen_keys(&self) -> Vec<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<RenderedMenu>;
    async fn load(&self, rendered: RenderedMenu) -> Result<usize>;
}
