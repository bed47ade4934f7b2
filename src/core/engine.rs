use crate::core::{pillars, relation, tally, zodiac};
use crate::domain::model::{BirthChart, BirthInfo, FourPillars};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// The engine's single boundary function: validate the input, compute the
/// four pillars into an immutable set, then derive every classification from
/// it. Returns a complete chart or an error, never a partial record.
pub fn classify_birth(info: &BirthInfo) -> Result<BirthChart> {
    info.validate()?;

    // 四柱 — all pillars are fixed before any classification reads them.
    let year = pillars::year_pillar(info.year, info.month, info.day);
    let month = pillars::month_pillar(info.month, info.day, year.stem);
    let day = pillars::day_pillar(info.year, info.month, info.day)?;
    let hour = info.hour.map(|h| pillars::hour_pillar(h, day.stem));
    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };

    let day_master = pillars.day.stem;
    let day_master_element = day_master.element();
    let element_tally = tally::tally_elements(&pillars);
    let relation_counts = relation::classify_relations(&pillars, day_master_element);
    let zodiac = zodiac::zodiac_sign(info.month, info.day);

    tracing::debug!(
        "Classified {:04}-{:02}-{:02}: {}年 {}月 {}日, day master {} ({})",
        info.year,
        info.month,
        info.day,
        pillars.year,
        pillars.month,
        pillars.day,
        day_master,
        day_master_element
    );

    Ok(BirthChart {
        pillars,
        day_master,
        day_master_element,
        element_tally,
        dominant_element: element_tally.dominant(),
        weak_element: element_tally.weakest(),
        day_branch: pillars.day.branch,
        relation_counts,
        zodiac,
    })
}
