//! Line strength and day/month interactions, plus whole-hexagram patterns.

use najia_tables::{Branch, Element, ElementRelation, Kinship, clashes, combines};

use crate::report_types::{
    InteractionReport, LineInfo, LineInteraction, SpecialPattern, Strength,
};

/// Strength of a line element in a month element.
pub fn strength(line: Element, month: Element) -> Strength {
    match month.relation_to(line) {
        ElementRelation::Same => Strength::Prosperous,
        ElementRelation::Generates => Strength::Strong,
        ElementRelation::GeneratedBy => Strength::Weakened,
        ElementRelation::Overcomes => Strength::Imprisoned,
        ElementRelation::OvercomeBy => Strength::Dead,
    }
}

/// Pattern formed by the lower and upper halves.
///
/// Checked in order six-clash, pure-palace, six-harmony; a later match
/// replaces an earlier one.
pub fn special_pattern(lines: &[LineInfo; 6]) -> Option<SpecialPattern> {
    let pairs_all = |rel: fn(Branch, Branch) -> bool| {
        (0..3).all(|i| rel(lines[i].branch, lines[i + 3].branch))
    };

    let mut pattern = None;
    if pairs_all(clashes) {
        pattern = Some(SpecialPattern::SixClash);
    }
    if lines.iter().all(|l| l.relation == Kinship::Sibling) {
        pattern = Some(SpecialPattern::PurePalaceClash);
    }
    if pairs_all(combines) {
        pattern = Some(SpecialPattern::SixHarmony);
    }
    pattern
}

/// Strength and day/month flags for each line.
pub fn evaluate_interactions(
    lines: &[LineInfo; 6],
    day_branch: Branch,
    month_branch: Branch,
) -> InteractionReport {
    let month_element = month_branch.element();
    let per_line = lines.map(|line| LineInteraction {
        position: line.position,
        strength: strength(line.element, month_element),
        secretly_moving: clashes(line.branch, day_branch),
        month_broken: clashes(line.branch, month_branch),
        combines_day: combines(line.branch, day_branch),
        combines_month: combines(line.branch, month_branch),
    });
    let special = special_pattern(lines);
    tracing::debug!(?special, %day_branch, %month_branch, "evaluated interactions");
    InteractionReport {
        special,
        lines: per_line,
    }
}
