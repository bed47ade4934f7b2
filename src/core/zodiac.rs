use crate::domain::model::ZodiacSign;

/// Sign cutoffs in calendar order; each entry opens its sign. Dates before
/// Jan 20 wrap back to Capricorn. Same scan shape as the month-branch table,
/// but this partition is independent of the stem-branch system entirely.
const ZODIAC_BOUNDARIES: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 22, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

/// Sign for a (month, day) pair; year- and hour-independent.
pub fn zodiac_sign(month: u32, day: u32) -> ZodiacSign {
    let mut sign = ZODIAC_BOUNDARIES[ZODIAC_BOUNDARIES.len() - 1].2;
    for &(cutoff_month, cutoff_day, candidate) in &ZODIAC_BOUNDARIES {
        if (month, day) < (cutoff_month, cutoff_day) {
            break;
        }
        sign = candidate;
    }
    sign
}
