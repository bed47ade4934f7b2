use saju_engine::{
    classify_birth, BirthInfo, Branch, Element, RelationalGroup, Stem, ZodiacSign,
};

#[test]
fn test_golden_chart_without_hour() {
    let chart = classify_birth(&BirthInfo::new(1990, 5, 15, None)).unwrap();

    assert_eq!(chart.pillars.year.stem, Stem::Geng);
    assert_eq!(chart.pillars.year.branch, Branch::Wu);
    assert_eq!(chart.pillars.month.stem, Stem::Xin);
    assert_eq!(chart.pillars.month.branch, Branch::Si);
    assert_eq!(chart.pillars.day.stem, Stem::Xin);
    assert_eq!(chart.pillars.day.branch, Branch::Si);
    assert_eq!(chart.pillars.hour, None);

    assert_eq!(chart.day_master, Stem::Xin);
    assert_eq!(chart.day_master_element, Element::Metal);
    assert_eq!(chart.day_branch, Branch::Si);

    assert_eq!(chart.element_tally.total(), 6);
    assert_eq!(chart.element_tally.count(Element::Metal), 3);
    assert_eq!(chart.element_tally.count(Element::Fire), 3);
    // Fire and metal are tied at three; fire wins by canonical order.
    assert_eq!(chart.dominant_element, Element::Fire);
    // Wood, earth and water are tied at zero; wood wins by canonical order.
    assert_eq!(chart.weak_element, Element::Wood);

    assert_eq!(chart.relation_counts.total(), 5);
    assert_eq!(
        chart.relation_counts.count(RelationalGroup::Independence),
        2
    );
    assert_eq!(chart.relation_counts.count(RelationalGroup::Authority), 3);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Expression), 0);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Wealth), 0);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Resource), 0);

    assert_eq!(chart.zodiac, ZodiacSign::Taurus);
}

#[test]
fn test_golden_chart_with_hour() {
    let without_hour = classify_birth(&BirthInfo::new(1990, 5, 15, None)).unwrap();
    let chart = classify_birth(&BirthInfo::new(1990, 5, 15, Some(14))).unwrap();

    // The hour only adds a pillar; year, month and day are untouched.
    assert_eq!(chart.pillars.year, without_hour.pillars.year);
    assert_eq!(chart.pillars.month, without_hour.pillars.month);
    assert_eq!(chart.pillars.day, without_hour.pillars.day);

    let hour = chart.pillars.hour.unwrap();
    assert_eq!(hour.stem, Stem::Yi);
    assert_eq!(hour.branch, Branch::Wei);

    assert_eq!(chart.element_tally.total(), 8);
    assert_eq!(chart.element_tally.count(Element::Wood), 1);
    assert_eq!(chart.element_tally.count(Element::Earth), 1);
    assert_eq!(chart.dominant_element, Element::Fire);
    assert_eq!(chart.weak_element, Element::Water);

    assert_eq!(chart.relation_counts.total(), 7);
    assert_eq!(
        chart.relation_counts.count(RelationalGroup::Independence),
        2
    );
    assert_eq!(chart.relation_counts.count(RelationalGroup::Wealth), 1);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Authority), 3);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Resource), 1);

    assert_eq!(chart.zodiac, ZodiacSign::Taurus);
}

#[test]
fn test_golden_chart_1949() {
    // 1949-10-01: 己丑年 癸酉月 甲子日.
    let chart = classify_birth(&BirthInfo::new(1949, 10, 1, None)).unwrap();

    assert_eq!(chart.pillars.year.stem, Stem::Ji);
    assert_eq!(chart.pillars.year.branch, Branch::Chou);
    assert_eq!(chart.pillars.month.stem, Stem::Gui);
    assert_eq!(chart.pillars.month.branch, Branch::You);
    assert_eq!(chart.pillars.day.stem, Stem::Jia);
    assert_eq!(chart.pillars.day.branch, Branch::Zi);

    assert_eq!(chart.day_master_element, Element::Wood);
    assert_eq!(chart.dominant_element, Element::Earth);
    assert_eq!(chart.weak_element, Element::Fire);

    assert_eq!(chart.relation_counts.count(RelationalGroup::Wealth), 2);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Authority), 1);
    assert_eq!(chart.relation_counts.count(RelationalGroup::Resource), 2);

    assert_eq!(chart.zodiac, ZodiacSign::Libra);
}

#[test]
fn test_repeated_calls_are_identical() {
    let info = BirthInfo::new(1988, 8, 8, Some(8));
    let first = classify_birth(&info).unwrap();
    for _ in 0..10 {
        assert_eq!(classify_birth(&info).unwrap(), first);
    }
}

#[test]
fn test_chart_round_trips_through_json() {
    let chart = classify_birth(&BirthInfo::new(1990, 5, 15, Some(14))).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    let restored: saju_engine::BirthChart = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, chart);
}
