pub mod engine;
pub mod pillars;
pub mod relation;
pub mod tally;
pub mod zodiac;

pub use crate::domain::model::{BirthChart, BirthInfo, FourPillars, Pillar};
pub use crate::utils::error::Result;
pub use engine::classify_birth;
