pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::seeds::SeedList;
pub use core::{etl::ScrapeEngine, pipeline::CatalogPipeline};
pub use domain::model::{CatalogReport, CourseRecord, Institution, InstitutionSeed, Level};
pub use utils::error::{Result, ScrapeError};
