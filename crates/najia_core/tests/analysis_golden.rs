//! Whole-table properties and golden charts from traditional references.

use chrono::NaiveDate;
use najia_core::{
    LineRole, LineStructure, MovingLines, analyze, changed_hexagram_name, hexagram_from_lines,
    structure_of,
};
use najia_tables::{Generation, HEXAGRAMS, Kinship, Trigram, Yao};
use najia_time::{DayInfo, resolve_day};
use pretty_assertions::assert_eq;

fn day(y: i32, m: u32, d: u32) -> DayInfo {
    resolve_day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn structure_name_bijection() {
    let mut seen = std::collections::HashSet::new();
    for bits in 0u8..64 {
        let lines = LineStructure::new(std::array::from_fn(|i| {
            if bits >> i & 1 == 1 { Yao::Yang } else { Yao::Yin }
        }));
        let found = hexagram_from_lines(lines);
        assert!(found.is_known(), "{lines}");
        assert!(seen.insert(found.name()));
        assert_eq!(structure_of(found.name()), Some(lines));
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn one_self_one_counterpart_everywhere() {
    let d = day(2024, 5, 20);
    for h in &HEXAGRAMS {
        let r = analyze(h.name, &d).unwrap();
        let selfs: Vec<u8> = r
            .lines
            .iter()
            .filter(|l| l.role == Some(LineRole::SelfLine))
            .map(|l| l.position)
            .collect();
        let counterparts: Vec<u8> = r
            .lines
            .iter()
            .filter(|l| l.role == Some(LineRole::Counterpart))
            .map(|l| l.position)
            .collect();
        assert_eq!(selfs, vec![r.self_line], "{}", h.name);
        assert_eq!(counterparts, vec![r.counterpart_line], "{}", h.name);
        assert_eq!(r.self_line.abs_diff(r.counterpart_line), 3, "{}", h.name);
    }
}

#[test]
fn flipping_any_subset_twice_restores() {
    for h in &HEXAGRAMS {
        for mask in 1u8..64 {
            let moving =
                MovingLines::from_positions((1..=6).filter(|p| mask >> (p - 1) & 1 == 1)).unwrap();
            let once = changed_hexagram_name(h.name, &moving);
            let twice = changed_hexagram_name(once.name(), &moving);
            assert_eq!(twice.name(), h.name);
        }
    }
}

#[test]
fn palace_elements_follow_trigram() {
    let d = day(2024, 5, 20);
    for h in &HEXAGRAMS {
        let r = analyze(h.name, &d).unwrap();
        assert_eq!(r.palace_element, r.palace.element(), "{}", h.name);
    }
}

#[test]
fn golden_chart_shui_lei_zhun() {
    // 水雷屯: 坎 palace second generation, self on 2, counterpart on 5.
    let r = analyze("水雷屯", &day(2024, 5, 20)).unwrap();
    assert_eq!(r.palace, Trigram::Kan);
    assert_eq!(r.generation, Generation::Second);
    assert_eq!((r.self_line, r.counterpart_line), (2, 5));

    let chart: Vec<(String, Kinship)> = r
        .lines
        .iter()
        .map(|l| (format!("{}{}", l.stem, l.branch), l.relation))
        .collect();
    let expected = [
        ("庚子", Kinship::Sibling),
        ("庚寅", Kinship::Offspring),
        ("庚辰", Kinship::Official),
        ("戊申", Kinship::Parent),
        ("戊戌", Kinship::Official),
        ("戊子", Kinship::Sibling),
    ]
    .map(|(p, k)| (p.to_string(), k));
    assert_eq!(chart, expected.to_vec());

    // 屯 lacks 妻財 (fire); 坎為水 line 3 is 戊午.
    let hidden: Vec<(u8, String)> = r
        .lines
        .iter()
        .filter_map(|l| {
            l.hidden
                .map(|h| (l.position, format!("{}{}{}", h.relation, h.stem, h.branch)))
        })
        .collect();
    assert_eq!(hidden, vec![(3, "妻財戊午".to_string())]);
}

#[test]
fn golden_wandering_soul() {
    // 火地晉: 乾 palace wandering soul, self on 4.
    let r = analyze("火地晉", &day(2024, 5, 20)).unwrap();
    assert_eq!(r.placement(), "乾宮游魂卦");
    assert_eq!((r.self_line, r.counterpart_line), (4, 1));
}

#[test]
fn report_serializes_with_traditional_labels() {
    let r = analyze("乾為天", &day(2000, 1, 1)).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["name"], "乾為天");
    assert_eq!(json["palace"], "乾");
    assert_eq!(json["generation"], "本宮卦");
    assert_eq!(json["lines"][0]["stem"], "甲");
    assert_eq!(json["lines"][0]["branch"], "子");
    assert_eq!(json["lines"][0]["relation"], "子孫");
    assert_eq!(json["lines"][5]["role"], "世");
    assert_eq!(json["voids"], serde_json::json!(["子", "丑"]));
}
