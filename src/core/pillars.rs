use chrono::{Datelike, NaiveDate};

use crate::domain::model::{Branch, Pillar, Stem};
use crate::utils::error::{Result, SajuError};

/// 立春 — the sexagenary year turns on Feb 4, not on the Gregorian new year.
const NEW_YEAR_MONTH: u32 = 2;
const NEW_YEAR_DAY: u32 = 4;

/// Year 4 CE opens a 60-cycle (甲子年).
const YEAR_CYCLE_ANCHOR: i32 = 4;

/// 1899-12-22 was a 甲子 day (cycle index 0), written as chrono's day number
/// counted from 0001-01-01. Pinned by a unit test below.
const DAY_EPOCH_DAYS_FROM_CE: i64 = 693_586;

/// 節氣 boundaries, in calendar order. Each entry opens the month ruled by its
/// branch; a date before its own month's cutoff still belongs to the previous
/// entry, and a date before Jan 6 belongs to December's 子 month.
const MONTH_BOUNDARIES: [(u32, u32, Branch); 12] = [
    (1, 6, Branch::Chou),
    (2, 4, Branch::Yin),
    (3, 6, Branch::Mao),
    (4, 5, Branch::Chen),
    (5, 6, Branch::Si),
    (6, 6, Branch::Wu),
    (7, 7, Branch::Wei),
    (8, 8, Branch::Shen),
    (9, 8, Branch::You),
    (10, 8, Branch::Xu),
    (11, 7, Branch::Hai),
    (12, 7, Branch::Zi),
];

// 年上起月: stem of the first (寅) month for each year-stem group.
const FIRST_MONTH_STEMS: [Stem; 5] = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];

// 日上起時: stem of the first (子) hour for each day-stem group.
const FIRST_HOUR_STEMS: [Stem; 5] = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];

/// Year pillar from the 60-cycle position of the effective year.
pub fn year_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let effective_year =
        if month < NEW_YEAR_MONTH || (month == NEW_YEAR_MONTH && day < NEW_YEAR_DAY) {
            year - 1
        } else {
            year
        };
    // rem_euclid keeps the index in [0, 60) for years before the anchor too.
    let index = (effective_year - YEAR_CYCLE_ANCHOR).rem_euclid(60) as usize;
    Pillar::from_sexagenary_index(index)
}

/// Branch of the month a date falls in, by ordered scan of the cutoff table.
fn month_branch(month: u32, day: u32) -> Branch {
    let mut branch = MONTH_BOUNDARIES[MONTH_BOUNDARIES.len() - 1].2;
    for &(cutoff_month, cutoff_day, candidate) in &MONTH_BOUNDARIES {
        if (month, day) < (cutoff_month, cutoff_day) {
            break;
        }
        branch = candidate;
    }
    branch
}

/// Month pillar: branch from the seasonal cutoff table, stem derived from the
/// year stem.
pub fn month_pillar(month: u32, day: u32, year_stem: Stem) -> Pillar {
    let branch = month_branch(month, day);
    let base = FIRST_MONTH_STEMS[year_stem.index() % FIRST_MONTH_STEMS.len()];
    // Months count from 寅; the +12 keeps 子 and 丑 non-negative.
    let months_into_year = (branch.index() + Branch::COUNT - Branch::Yin.index()) % Branch::COUNT;
    let stem = Stem::from_index(base.index() + months_into_year);
    Pillar { stem, branch }
}

/// Day pillar from the day count since the 甲子 epoch.
pub fn day_pillar(year: i32, month: u32, day: u32) -> Result<Pillar> {
    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| SajuError::InvalidBirthInfo {
            field: "day".to_string(),
            value: format!("{:04}-{:02}-{:02}", year, month, day),
            reason: "not a valid calendar date".to_string(),
        })?;
    let diff_days = i64::from(date.num_days_from_ce()) - DAY_EPOCH_DAYS_FROM_CE;
    let index = diff_days.rem_euclid(60) as usize;
    Ok(Pillar::from_sexagenary_index(index))
}

/// Hour pillar: two-hour windows starting at 23:00, so hours 23 and 0 share
/// the 子 window. The stem is derived from the day stem.
pub fn hour_pillar(hour: u32, day_stem: Stem) -> Pillar {
    let branch = Branch::from_index((hour as usize + 1) / 2 % Branch::COUNT);
    let base = FIRST_HOUR_STEMS[day_stem.index() % FIRST_HOUR_STEMS.len()];
    let stem = Stem::from_index(base.index() + branch.index());
    Pillar { stem, branch }
}
