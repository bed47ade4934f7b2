use crate::domain::model::{
    cyclic_offset, Element, FourPillars, RelationCounts, RelationalGroup,
};

/// Classify one element against the day master by its production-ring offset.
pub fn relation_to(day_master: Element, target: Element) -> RelationalGroup {
    RelationalGroup::from_offset(cyclic_offset(day_master, target))
}

/// Count relational groups over every glyph except the day stem itself — the
/// day master is the reference and cannot be its own subject. The pillars are
/// fully computed before this runs; `day_master` is passed in explicitly.
pub fn classify_relations(pillars: &FourPillars, day_master: Element) -> RelationCounts {
    let mut counts = RelationCounts::default();
    let mut classify = |element: Element| counts.add(relation_to(day_master, element));

    classify(pillars.year.stem.element());
    classify(pillars.year.branch.element());
    classify(pillars.month.stem.element());
    classify(pillars.month.branch.element());
    classify(pillars.day.branch.element());
    if let Some(hour) = &pillars.hour {
        classify(hour.stem.element());
        classify(hour.branch.element());
    }

    counts
}
