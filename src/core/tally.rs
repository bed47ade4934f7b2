use crate::domain::model::{ElementTally, FourPillars};

/// Count the element of every glyph in the pillar set. The day stem is
/// included here (balance is a property of the whole chart), even though the
/// relational classifier later excludes it.
pub fn tally_elements(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for pillar in pillars.iter() {
        tally.add(pillar.stem.element());
        tally.add(pillar.branch.element());
    }
    tally
}
