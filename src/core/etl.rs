use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MenuEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MenuEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetch, render and print once. Returns the number of lines written.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("🚀 Fetching menu feed...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("📥 Received {} feed lines", lines.len());

        let rendered = self.pipeline.transform(lines).await?;
        tracing::info!(
            "🍽️ Rendered {} dishes over {} days",
            rendered.dishes_rendered,
            rendered.days_rendered
        );

        let written = self.pipeline.load(rendered).await?;
        tracing::info!("✅ Wrote {} lines", written);

        Ok(written)
    }
}
