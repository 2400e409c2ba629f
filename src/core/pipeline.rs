use crate::core::menu::build_menu;
use crate::core::render::{render_banner, Renderer};
use crate::core::{FeedSource, MenuRequest, Output, Pipeline, RenderedMenu};
use crate::domain::codes::Codebook;
use crate::utils::error::Result;

pub struct MenuPipeline<F: FeedSource, O: Output> {
    feed: F,
    output: O,
    request: MenuRequest,
    codebook: Codebook,
}

impl<F: FeedSource, O: Output> MenuPipeline<F, O> {
    pub fn new(feed: F, output: O, request: MenuRequest, codebook: Codebook) -> Self {
        Self {
            feed,
            output,
            request,
            codebook,
        }
    }
}

#[async_trait::async_trait]
impl<F: FeedSource, O: Output> Pipeline for MenuPipeline<F, O> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!(
            "Requesting week {} for {} ({})",
            self.request.week,
            self.request.canteen.name,
            self.request.canteen.source
        );
        self.feed
            .fetch_lines(&self.request.canteen, self.request.week)
            .await
    }

    async fn transform(&self, lines: Vec<String>) -> Result<RenderedMenu> {
        let menu = build_menu(&lines);
        let renderer = Renderer::new(&self.codebook, &self.request.display);

        let body = renderer.render_menu(&menu, self.request.day, &self.request.diet);

        let mut lines = render_banner(&self.request);
        lines.extend(body.lines);

        Ok(RenderedMenu {
            lines,
            days_rendered: body.days_rendered,
            dishes_rendered: body.dishes_rendered,
        })
    }

    async fn load(&self, rendered: RenderedMenu) -> Result<usize> {
        self.output.write_lines(&rendered.lines).await?;
        Ok(rendered.lines.len())
    }
}
