pub mod day;
pub mod etl;
pub mod filter;
pub mod menu;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod selection;

pub use crate::domain::model::{Dish, Menu, MenuRequest, RenderedMenu};
pub use crate::domain::ports::{ConfigProvider, FeedSource, Output, Pipeline};
pub use crate::utils::error::Result;
