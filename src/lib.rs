pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpFeedSource;
pub use config::cli::{BufferOutput, StdoutOutput};
pub use config::toml_config::MenuConfig;
pub use core::{etl::MenuEngine, pipeline::MenuPipeline};
pub use domain::codes::{CodeTable, Codebook};
pub use utils::error::{MenuError, Result};
