pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::engine::classify_birth;
pub use crate::domain::model::{
    BirthChart, BirthInfo, Branch, Element, ElementTally, FourPillars, Pillar, RelationCounts,
    RelationalGroup, Stem, ZodiacSign,
};
pub use crate::utils::error::{Result, SajuError};
