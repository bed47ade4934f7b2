use crate::domain::model::BirthInfo;
use crate::domain::ports::BirthProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "saju")]
#[command(about = "Four-pillar birth chart classifier")]
pub struct CliConfig {
    #[arg(long)]
    pub year: i32,

    #[arg(long)]
    pub month: u32,

    #[arg(long)]
    pub day: u32,

    #[arg(long, help = "Birth hour (0-23); omit if unknown")]
    pub hour: Option<u32>,

    #[arg(long, help = "Print the chart as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl BirthProvider for CliConfig {
    fn birth_info(&self) -> BirthInfo {
        BirthInfo::new(self.year, self.month, self.day, self.hour)
    }
}
