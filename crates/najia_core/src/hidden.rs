//! Hidden relations (伏神) borrowed from the palace root hexagram.

use najia_tables::palace_for_trigram;
use najia_time::DayInfo;

use crate::assign::assign_visible;
use crate::error::NajiaError;
use crate::report_types::{HexagramReport, HiddenLine};

/// Annotate lines with relations missing from the visible six.
///
/// The palace root is analysed visibly only, so lookup depth never exceeds
/// one. A relation already visible is never attached as hidden.
pub fn resolve_hidden(report: &mut HexagramReport, day: &DayInfo) -> Result<(), NajiaError> {
    let present = report.present_relations();
    if present.is_complete() {
        return Ok(());
    }
    let root_name = palace_for_trigram(report.palace).root();
    tracing::debug!(
        name = report.name,
        root = root_name,
        missing = ?present.missing(),
        "resolving hidden relations"
    );

    let root = assign_visible(root_name, day)?;
    for (line, root_line) in report.lines.iter_mut().zip(root.lines.iter()) {
        if !present.contains(root_line.relation) {
            line.hidden = Some(HiddenLine {
                relation: root_line.relation,
                stem: root_line.stem,
                branch: root_line.branch,
                element: root_line.element,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::analyze;
    use chrono::NaiveDate;
    use najia_tables::{Branch, Kinship, Stem};
    use najia_time::resolve_day;

    fn day() -> DayInfo {
        resolve_day(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
    }

    #[test]
    fn complete_hexagram_has_no_hidden_lines() {
        let r = analyze("乾為天", &day()).unwrap();
        assert!(r.lines.iter().all(|l| l.hidden.is_none()));
    }

    #[test]
    fn gou_hides_wealth_under_line_two() {
        // 天風姤 lacks 妻財; 乾為天 line 2 is 甲寅 wood.
        let r = analyze("天風姤", &day()).unwrap();
        assert!(!r.present_relations().contains(Kinship::Wealth));
        let hidden: Vec<_> = r
            .lines
            .iter()
            .filter_map(|l| l.hidden.map(|h| (l.position, h)))
            .collect();
        assert_eq!(hidden.len(), 1);
        let (position, h) = hidden[0];
        assert_eq!(position, 2);
        assert_eq!(h.relation, Kinship::Wealth);
        assert_eq!((h.stem, h.branch), (Stem::Jia, Branch::Yin));
    }

    #[test]
    fn hidden_never_duplicates_visible() {
        for h in &najia_tables::HEXAGRAMS {
            let r = analyze(h.name, &day()).unwrap();
            let present = r.present_relations();
            for line in &r.lines {
                if let Some(hidden) = line.hidden {
                    assert!(!present.contains(hidden.relation), "{}", h.name);
                }
            }
        }
    }

    #[test]
    fn every_relation_visible_or_hidden() {
        for h in &najia_tables::HEXAGRAMS {
            let r = analyze(h.name, &day()).unwrap();
            let mut all = r.present_relations();
            for hidden in r.lines.iter().filter_map(|l| l.hidden) {
                all.insert(hidden.relation);
            }
            assert!(all.is_complete(), "{}", h.name);
        }
    }
}
