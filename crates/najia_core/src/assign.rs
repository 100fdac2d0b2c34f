//! Na-Jia assignment: palace, generation, and per-line stem/branch labels.

use najia_tables::{
    Branch, Hexagram, Stem, classify_kinship, hexagram_by_name, line_position_name, palace_of,
    spirit_for_line,
};
use najia_time::{DayInfo, resolve_void};

use crate::error::NajiaError;
use crate::hidden::resolve_hidden;
use crate::report_types::{HexagramReport, LineInfo, LineRole};

/// Stem and branch attached to a 1-based line position, or None outside 1-6.
///
/// Lines 1-3 take the lower trigram's inner stem and branches, lines 4-6 the
/// upper trigram's outer stem and branches.
pub fn najia_pair(hexagram: &Hexagram, position: u8) -> Option<(Stem, Branch)> {
    match position {
        1..=6 => Some(pair_at(hexagram, usize::from(position) - 1)),
        _ => None,
    }
}

/// Pair for a 0-based line index below 6.
fn pair_at(hexagram: &Hexagram, i: usize) -> (Stem, Branch) {
    if i < 3 {
        (hexagram.lower.lower_stem(), hexagram.lower.lower_branches()[i])
    } else {
        (hexagram.upper.upper_stem(), hexagram.upper.upper_branches()[i - 3])
    }
}

/// Full analysis of a named hexagram for a day, hidden lines included.
pub fn analyze(name: &str, day: &DayInfo) -> Result<HexagramReport, NajiaError> {
    let mut report = assign_visible(name, day)?;
    resolve_hidden(&mut report, day)?;
    Ok(report)
}

/// Analysis of the six visible lines only.
pub fn assign_visible(name: &str, day: &DayInfo) -> Result<HexagramReport, NajiaError> {
    let hexagram = hexagram_by_name(name).ok_or_else(|| NajiaError::Lookup(name.to_string()))?;
    let (palace, generation) = palace_of(name).ok_or_else(|| {
        NajiaError::ReferenceData(format!("{name} belongs to no palace"))
    })?;
    let voids = resolve_void(day.stem, day.branch)?;
    let palace_element = palace.element();
    let self_line = generation.self_line();
    let counterpart_line = generation.counterpart_line();

    tracing::debug!(
        name,
        palace = palace.trigram.name(),
        generation = generation.name(),
        self_line,
        "assigning lines"
    );

    let yao = hexagram.lines();
    let lines = std::array::from_fn(|i| {
        let position = i as u8 + 1;
        let (stem, branch) = pair_at(hexagram, i);
        let element = branch.element();
        let role = if position == self_line {
            Some(LineRole::SelfLine)
        } else if position == counterpart_line {
            Some(LineRole::Counterpart)
        } else {
            None
        };
        let line = LineInfo {
            position,
            position_name: line_position_name(position),
            yao: yao[i],
            stem,
            branch,
            element,
            relation: classify_kinship(element, palace_element),
            spirit: spirit_for_line(day.stem, position),
            role,
            is_void: voids.contains(&branch),
            hidden: None,
        };
        tracing::trace!(position, %stem, %branch, relation = %line.relation, "line");
        line
    });

    Ok(HexagramReport {
        name: hexagram.name,
        number: hexagram.number,
        upper: hexagram.upper,
        lower: hexagram.lower,
        palace: palace.trigram,
        palace_element,
        generation,
        self_line,
        counterpart_line,
        day_stem: day.stem,
        voids,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use najia_tables::{Element, Generation, Kinship, Spirit, Trigram};
    use najia_time::resolve_day;

    fn day() -> DayInfo {
        resolve_day(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
    }

    #[test]
    fn qian_palace_root() {
        let r = analyze("乾為天", &day()).unwrap();
        assert_eq!(r.palace, Trigram::Qian);
        assert_eq!(r.generation, Generation::Root);
        assert_eq!(r.palace_element, Element::Metal);
        assert_eq!(r.self_line, 6);
        assert_eq!(r.counterpart_line, 3);
        assert_eq!(r.lines[5].role, Some(LineRole::SelfLine));
        assert_eq!(r.lines[2].role, Some(LineRole::Counterpart));
    }

    #[test]
    fn qian_najia() {
        let r = analyze("乾為天", &day()).unwrap();
        let pillars: Vec<String> = r
            .lines
            .iter()
            .map(|l| format!("{}{}", l.stem, l.branch))
            .collect();
        assert_eq!(pillars, ["甲子", "甲寅", "甲辰", "壬午", "壬申", "壬戌"]);
    }

    #[test]
    fn qian_relations() {
        let r = analyze("乾為天", &day()).unwrap();
        let rel: Vec<Kinship> = r.lines.iter().map(|l| l.relation).collect();
        assert_eq!(
            rel,
            [
                Kinship::Offspring,
                Kinship::Wealth,
                Kinship::Parent,
                Kinship::Official,
                Kinship::Sibling,
                Kinship::Parent,
            ]
        );
    }

    #[test]
    fn spirits_follow_day_stem() {
        // 戊 day: 勾陳 on line 1.
        let r = analyze("坤為地", &day()).unwrap();
        assert_eq!(r.lines[0].spirit, Spirit::HookedArray);
        assert_eq!(r.lines[4].spirit, Spirit::AzureDragon);
        assert_eq!(r.lines[5].spirit, Spirit::VermilionBird);
    }

    #[test]
    fn void_flags_match_day() {
        // 戊午 day voids 子丑; 乾為天 line 1 is 子.
        let r = analyze("乾為天", &day()).unwrap();
        assert!(r.lines[0].is_void);
        assert!(!r.lines[1].is_void);
    }

    #[test]
    fn returning_soul_self_line() {
        let r = analyze("火天大有", &day()).unwrap();
        assert_eq!(r.generation, Generation::Returning);
        assert_eq!((r.self_line, r.counterpart_line), (3, 6));
    }

    #[test]
    fn najia_pair_rejects_positions_outside_hexagram() {
        let kun = hexagram_by_name("坤為地").unwrap();
        assert_eq!(najia_pair(kun, 1), Some((Stem::Yi, Branch::Wei)));
        assert_eq!(najia_pair(kun, 6), Some((Stem::Gui, Branch::You)));
        assert_eq!(najia_pair(kun, 0), None);
        assert_eq!(najia_pair(kun, 7), None);
    }

    #[test]
    fn unknown_name_is_lookup_error() {
        assert_eq!(
            analyze("未知卦", &day()),
            Err(NajiaError::Lookup("未知卦".into()))
        );
    }
}
