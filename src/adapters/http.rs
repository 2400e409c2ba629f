use crate::domain::model::Canteen;
use crate::domain::ports::FeedSource;
use crate::utils::error::{MenuError, Result};
use reqwest::Client;

pub const CANTEEN_PLACEHOLDER: &str = "{canteen}";
pub const WEEK_PLACEHOLDER: &str = "{week}";

/// Fetches the weekly CSV over HTTP. The feed is latin-1 encoded.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
    url_template: String,
}

impl HttpFeedSource {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url_template: url_template.into(),
        }
    }

    pub fn feed_url(&self, canteen: &Canteen, week: u32) -> String {
        expand_url(&self.url_template, &canteen.source, week)
    }
}

pub fn expand_url(template: &str, source: &str, week: u32) -> String {
    template
        .replace(CANTEEN_PLACEHOLDER, source)
        .replace(WEEK_PLACEHOLDER, &week.to_string())
}

/// Latin-1 maps every byte to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

impl FeedSource for HttpFeedSource {
    async fn fetch_lines(&self, canteen: &Canteen, week: u32) -> Result<Vec<String>> {
        let url = self.feed_url(canteen, week);

        tracing::debug!("Fetching menu feed from: {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("Feed response status: {}", response.status());

        if !response.status().is_success() {
            return Err(MenuError::FeedStatusError {
                status: response.status().as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Received {} bytes", bytes.len());

        Ok(split_lines(&decode_latin1(&bytes)))
    }
}
