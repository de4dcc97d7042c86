pub mod etl;
pub mod html;
pub mod pipeline;

pub use crate::domain::model::{CatalogReport, InstitutionScrape};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
